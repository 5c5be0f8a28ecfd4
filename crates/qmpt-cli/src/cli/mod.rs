pub mod abduce;
pub mod query;
pub mod run;

use ariadne::{Config, Label, Report, ReportKind};
use qmpt_ast::Program;
use qmpt_parser::{parse_program, ParseError, SrcId};
use qmpt_solve::{Engine, SolverConfig, Substitution};
use std::fs;
use std::path::Path;

/// Render parse errors against their source text on stderr
pub fn report_parse_errors(src: SrcId, text: &str, errors: &[ParseError]) {
    for error in errors {
        let span = error.span();
        let report = Report::build(ReportKind::Error, src, span.start())
            .with_config(Config::default().with_color(false))
            .with_message(error.message())
            .with_label(Label::new(span).with_message("here"))
            .finish();
        if report.eprint(ariadne::sources([(src, text)])).is_err() {
            eprintln!("  {}", error);
        }
    }
}

/// Read and parse a program file
pub fn read_program(path: &Path) -> Result<Program, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    let src = SrcId::from_path(path);
    parse_program(&content, src).map_err(|errors| {
        report_parse_errors(src, &content, &errors);
        format!(
            "Failed to parse '{}' ({} error(s))",
            path.display(),
            errors.len()
        )
    })
}

/// Build an engine holding every clause of `program`
pub fn load_engine(program: &Program, config: SolverConfig) -> Result<Engine, String> {
    let mut engine = Engine::with_config(config);
    engine.load_program(program).map_err(|e| e.to_string())?;
    log::info!("loaded {} clause(s)", engine.rule_count());
    Ok(engine)
}

/// Print answers indented under their query, or `false` if there are none
pub fn print_solutions(solutions: impl Iterator<Item = Substitution>) -> usize {
    let mut count = 0;
    for answer in solutions {
        println!("  {}", answer);
        count += 1;
    }
    if count == 0 {
        println!("  false");
    }
    count
}

pub fn with_limit(mut config: SolverConfig, limit: Option<usize>) -> SolverConfig {
    if limit.is_some() {
        config.solution_limit = limit;
    }
    config
}
