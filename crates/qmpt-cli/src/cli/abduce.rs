use log::debug;
use qmpt_ast::{Program, Term};
use qmpt_kb::{Candidate, Kb};
use qmpt_solve::SolverConfig;
use std::path::PathBuf;

use super::{load_engine, read_program};

pub struct AbduceArgs {
    pub labels: Vec<i64>,
    pub result: i64,
    pub max_revision: Option<usize>,
    pub more: usize,
    pub pseudo_labels: Vec<i64>,
    pub kb: Option<PathBuf>,
}

pub fn run(args: &AbduceArgs, config: SolverConfig) -> Result<(), String> {
    let pseudo_labels: Vec<Term> = args.pseudo_labels.iter().copied().map(Term::int).collect();
    let mut kb = match &args.kb {
        Some(path) => {
            let program: Program = read_program(path)?;
            let engine = load_engine(&program, config)?;
            Kb::new(engine, pseudo_labels).map_err(|e| e.to_string())?
        }
        None => {
            let mut kb = Kb::addition()
                .and_then(|kb| kb.with_pseudo_labels(pseudo_labels))
                .map_err(|e| e.to_string())?;
            kb.engine_mut().set_config(config);
            kb
        }
    };

    let labels: Vec<Term> = args.labels.iter().copied().map(Term::int).collect();
    let result = Term::int(args.result);
    let max_revision = args.max_revision.unwrap_or(labels.len());

    let candidates = kb
        .abduce_candidates(&labels, &result, max_revision, args.more)
        .map_err(|e| e.to_string())?;
    debug!("{} candidate(s)", candidates.len());

    if candidates.is_empty() {
        println!("No candidates found.");
    }
    for candidate in &candidates {
        println!("{}", format_candidate(candidate));
    }
    Ok(())
}

fn format_candidate(candidate: &Candidate) -> String {
    format!("{} -> {}", Term::list(candidate.labels.clone()), candidate.result)
}
