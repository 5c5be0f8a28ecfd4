use qmpt_ast::Query;
use qmpt_parser::{parse_term, SrcId};
use qmpt_solve::SolverConfig;
use std::path::Path;

use super::{load_engine, print_solutions, read_program, report_parse_errors, with_limit};

pub fn run(path: &Path, goal: &str, config: SolverConfig, limit: Option<usize>) -> Result<(), String> {
    let program = read_program(path)?;
    let src = SrcId::command_line();
    let goal = parse_term(goal, src).map_err(|errors| {
        report_parse_errors(src, goal, &errors);
        format!("Failed to parse goal '{}'", goal)
    })?;
    let engine = load_engine(&program, with_limit(config, limit))?;

    println!("{}", Query { goal: goal.clone() });
    print_solutions(engine.solve(&goal));
    Ok(())
}
