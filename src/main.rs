use clap::Parser;

mod commands;
mod output;

use commands::guide;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Markdown,
}

#[derive(Parser)]
#[command(name = "cmdguide")]
#[command(version = VERSION)]
#[command(about = "Help and recommendations for a directory of slash commands")]
struct Cli {
    #[command(flatten)]
    guide: guide::GuideArgs,

    /// Print the structured result as JSON instead of Markdown
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let mode = if cli.json {
        ResponseMode::Json
    } else {
        ResponseMode::Markdown
    };

    match mode {
        ResponseMode::Markdown => match guide::run_markdown(cli.guide) {
            Ok((content, exit_code)) => {
                if let Err(err) = output::print_markdown(&content) {
                    output::print_error_line(&err);
                    return std::process::ExitCode::from(1);
                }
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
            Err(err) => {
                output::print_error_line(&err);
                let exit_code = output::exit_code_for_error(err.code);
                std::process::ExitCode::from(exit_code_to_u8(exit_code))
            }
        },
        ResponseMode::Json => {
            let (json_result, exit_code) = output::map_cmd_result_to_json(guide::run(cli.guide));
            if output::print_json_result(json_result).is_err() {
                return std::process::ExitCode::from(1);
            }
            std::process::ExitCode::from(exit_code_to_u8(exit_code))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
