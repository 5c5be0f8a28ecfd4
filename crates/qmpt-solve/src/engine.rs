use qmpt_ast::{self as ast, Program};
use qmpt_core::{goal_from_ast, Bindings, ClauseError, Goal, RuleStore};
use qmpt_parser::{parse_program, ParseError, SrcId};
use thiserror::Error;

use crate::config::SolverConfig;
use crate::search::Solutions;
use crate::substitution::Substitution;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Clause(#[from] ClauseError),
    #[error("{}", join_errors(.0))]
    Parse(Vec<ParseError>),
}

fn join_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ParseError>> for EngineError {
    fn from(errors: Vec<ParseError>) -> Self {
        EngineError::Parse(errors)
    }
}

/// The rule database together with the limits used for solving.
///
/// Each call to [`Engine::solve`] gets its own binding and hypothesis
/// stores; the rules are shared and cannot change while a solve is running.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    rules: RuleStore,
    config: SolverConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Engine {
            rules: RuleStore::new(),
            config,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Forget every rule and fact
    pub fn reset(&mut self) {
        self.rules.reset();
    }

    pub fn add_fact(&mut self, head: &ast::Term) -> Result<(), EngineError> {
        Ok(self.rules.add_fact(head)?)
    }

    pub fn add_rule(&mut self, head: &ast::Term, body: &[ast::Term]) -> Result<(), EngineError> {
        Ok(self.rules.add_rule(head, body)?)
    }

    /// Assert every clause of the program in order. Queries are ignored.
    pub fn load_program(&mut self, program: &Program) -> Result<(), EngineError> {
        for clause in program.clauses() {
            self.rules.add_clause(clause)?;
        }
        Ok(())
    }

    /// Parse `text` and load it; the parsed program is returned so callers
    /// can run its queries.
    pub fn consult(&mut self, text: &str) -> Result<Program, EngineError> {
        let program = parse_program(text, SrcId::empty())?;
        self.load_program(&program)?;
        Ok(program)
    }

    /// Lazily enumerate the solutions of `goal`
    pub fn solve(&self, goal: &ast::Term) -> Solutions<'_> {
        let mut bindings = Bindings::new();
        let Goal { term, vars } = goal_from_ast(&mut bindings, goal);
        Solutions::new(&self.rules, self.config.clone(), bindings, term, vars)
    }

    pub fn solve_all(&self, goal: &ast::Term) -> Vec<Substitution> {
        self.solve(goal).collect()
    }

    /// Does `goal` have at least one solution?
    pub fn prove(&self, goal: &ast::Term) -> bool {
        self.solve(goal).next().is_some()
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine_tests.rs"]
mod tests;
