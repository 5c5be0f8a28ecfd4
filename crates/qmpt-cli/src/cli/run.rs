use qmpt_solve::SolverConfig;
use std::path::Path;

use super::{load_engine, print_solutions, read_program, with_limit};

pub fn run(path: &Path, config: SolverConfig, limit: Option<usize>) -> Result<(), String> {
    let program = read_program(path)?;
    let engine = load_engine(&program, with_limit(config, limit))?;

    let queries: Vec<_> = program.queries().collect();
    if queries.is_empty() {
        println!(
            "Loaded {} clause(s) from '{}'; no queries to run.",
            engine.rule_count(),
            path.display()
        );
        return Ok(());
    }

    for query in queries {
        println!("{}", query);
        print_solutions(engine.solve(&query.goal));
    }
    Ok(())
}
