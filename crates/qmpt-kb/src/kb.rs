//! A knowledge base wrapped around the solver, used to revise noisy
//! pseudo-labels until their reasoning result matches a known answer.
//!
//! The program must define `logic_forward(Labels, Result)`, where `Labels`
//! is a list of pseudo-labels.

use log::{debug, trace};
use qmpt_ast::Term;
use qmpt_solve::{Engine, EngineError};
use thiserror::Error;

use crate::cache::{LruCache, DEFAULT_CACHE_SIZE};

const ADDITION: &str = include_str!("../data/addition.pl");

#[derive(Debug, Error)]
pub enum KbError {
    #[error("revision index {idx} out of range for {len} labels")]
    IndexOutOfRange { idx: usize, len: usize },
    #[error("pseudo-label list is empty")]
    NoPseudoLabels,
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Revised labels together with the reasoning result they produce
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub labels: Vec<Term>,
    pub result: Term,
}

/// Arguments of one abduction, used as the cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbductionKey {
    pub labels: Vec<Term>,
    pub result: Term,
    pub max_revision_num: usize,
    pub require_more_revision: usize,
}

pub struct Kb {
    engine: Engine,
    pseudo_labels: Vec<Term>,
    cache: Option<LruCache<AbductionKey, Vec<Candidate>>>,
}

impl Kb {
    /// Wrap a loaded engine. Revised labels are restricted to `pseudo_labels`.
    pub fn new(engine: Engine, pseudo_labels: Vec<Term>) -> Result<Self, KbError> {
        if pseudo_labels.is_empty() {
            return Err(KbError::NoPseudoLabels);
        }
        Ok(Kb {
            engine,
            pseudo_labels,
            cache: Some(LruCache::new(DEFAULT_CACHE_SIZE)),
        })
    }

    /// Load a program from source text
    pub fn from_source(text: &str, pseudo_labels: Vec<Term>) -> Result<Self, KbError> {
        let mut engine = Engine::new();
        engine.consult(text)?;
        Self::new(engine, pseudo_labels)
    }

    /// Single-digit addition: `logic_forward([A, B], C)` holds when
    /// `A + B = C` for digits `A` and `B`.
    pub fn addition() -> Result<Self, KbError> {
        Self::from_source(ADDITION, (0..10).map(Term::int).collect())
    }

    /// Replace the values revised labels may take
    pub fn with_pseudo_labels(mut self, pseudo_labels: Vec<Term>) -> Result<Self, KbError> {
        if pseudo_labels.is_empty() {
            return Err(KbError::NoPseudoLabels);
        }
        self.pseudo_labels = pseudo_labels;
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
        Ok(self)
    }

    /// Use a cache of the given size, or none at all with `0`
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache = (size > 0).then(|| LruCache::new(size));
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn pseudo_labels(&self) -> &[Term] {
        &self.pseudo_labels
    }

    pub fn cache(&self) -> Option<&LruCache<AbductionKey, Vec<Candidate>>> {
        self.cache.as_ref()
    }

    /// The reasoning result of `labels`: the first `Res` the solver finds
    /// for `logic_forward(labels, Res)`.
    pub fn logic_forward(&self, labels: &[Term]) -> Option<Term> {
        let goal = forward_goal(labels.to_vec(), Term::var("Res"));
        self.engine
            .solve(&goal)
            .next()
            .and_then(|answer| answer.value("Res").cloned())
    }

    /// Every way of replacing the labels at `revision_idx` by pseudo-labels
    /// such that the reasoning result is `result`.
    pub fn revise_at_idx(
        &self,
        labels: &[Term],
        result: &Term,
        revision_idx: &[usize],
    ) -> Result<Vec<Candidate>, KbError> {
        if let Some(&idx) = revision_idx.iter().find(|idx| **idx >= labels.len()) {
            return Err(KbError::IndexOutOfRange {
                idx,
                len: labels.len(),
            });
        }

        let mut pattern = labels.to_vec();
        for &idx in revision_idx {
            pattern[idx] = revision_var(idx);
        }
        let goal = forward_goal(pattern.clone(), result.clone());
        trace!("revise at {:?}: {}", revision_idx, goal);

        let mut candidates: Vec<Candidate> = Vec::new();
        for answer in self.engine.solve(&goal) {
            let revised = answer.apply(&Term::list(pattern.clone()));
            let Some((items, None)) = revised.as_list() else {
                continue;
            };
            let revised: Vec<Term> = items.into_iter().cloned().collect();
            let allowed = revision_idx
                .iter()
                .all(|&idx| self.pseudo_labels.contains(&revised[idx]));
            let candidate = Candidate {
                labels: revised,
                result: result.clone(),
            };
            if allowed && !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
        Ok(candidates)
    }

    /// Minimum-revision abduction: revise as few labels as possible (at most
    /// `max_revision_num`) to make the reasoning result equal `result`, then
    /// also collect the candidates needing up to `require_more_revision`
    /// additional revisions. Results are cached per argument set.
    pub fn abduce_candidates(
        &mut self,
        labels: &[Term],
        result: &Term,
        max_revision_num: usize,
        require_more_revision: usize,
    ) -> Result<Vec<Candidate>, KbError> {
        let key = AbductionKey {
            labels: labels.to_vec(),
            result: result.clone(),
            max_revision_num,
            require_more_revision,
        };
        if let Some(cached) = self.cache.as_mut().and_then(|cache| cache.get(&key)) {
            trace!("abduction cache hit");
            return Ok(cached.clone());
        }

        let candidates =
            self.abduce_by_search(labels, result, max_revision_num, require_more_revision)?;
        if let Some(cache) = self.cache.as_mut() {
            cache.insert(key, candidates.clone());
        }
        Ok(candidates)
    }

    fn abduce_by_search(
        &self,
        labels: &[Term],
        result: &Term,
        max_revision_num: usize,
        require_more_revision: usize,
    ) -> Result<Vec<Candidate>, KbError> {
        let mut candidates = Vec::new();
        let mut min_revision_num = None;
        for revision_num in 0..=labels.len() {
            candidates.extend(self.revision(revision_num, labels, result)?);
            if !candidates.is_empty() {
                min_revision_num = Some(revision_num);
                break;
            }
            if revision_num >= max_revision_num {
                return Ok(Vec::new());
            }
        }
        let Some(min_revision_num) = min_revision_num else {
            return Ok(Vec::new());
        };
        debug!(
            "abduced {} candidate(s) with {} revision(s)",
            candidates.len(),
            min_revision_num
        );

        for revision_num in min_revision_num + 1..=min_revision_num + require_more_revision {
            if revision_num > max_revision_num || revision_num > labels.len() {
                break;
            }
            candidates.extend(self.revision(revision_num, labels, result)?);
        }
        Ok(candidates)
    }

    /// Candidates revising exactly `revision_num` labels
    fn revision(
        &self,
        revision_num: usize,
        labels: &[Term],
        result: &Term,
    ) -> Result<Vec<Candidate>, KbError> {
        let mut candidates = Vec::new();
        for revision_idx in combinations(labels.len(), revision_num) {
            candidates.extend(self.revise_at_idx(labels, result, &revision_idx)?);
        }
        Ok(candidates)
    }
}

fn forward_goal(labels: Vec<Term>, result: Term) -> Term {
    Term::compound("logic_forward", vec![Term::list(labels), result])
}

fn revision_var(idx: usize) -> Term {
    Term::var(&format!("P{}", idx))
}

/// All `k`-element subsets of `0..n` as ascending index lists, in
/// lexicographic order
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut current: Vec<usize> = (0..k).collect();
    loop {
        out.push(current.clone());
        // rightmost position that can still move up
        let Some(pos) = (0..k).rev().find(|&i| current[i] < n - k + i) else {
            return out;
        };
        current[pos] += 1;
        for i in pos + 1..k {
            current[i] = current[i - 1] + 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/kb_tests.rs"]
mod tests;
