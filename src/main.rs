use anyhow::Result;
use clap::Parser;

use gtl_cli::cli::commands::{configure, form, translate};
use gtl_cli::cli::exit::exit_code;
use gtl_cli::cli::{Args, Command};
use gtl_cli::output::{self, OutputConfig};
use gtl_cli::translation::{TranslateError, print_languages};
use gtl_cli::ui::print_error;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(
        args.quiet,
        args.verbose,
        args.no_color,
    ));

    if let Err(err) = run(args).await {
        report(&err);
        std::process::exit(exit_code(&err));
    }
}

fn report(err: &anyhow::Error) {
    // Translation errors already embed their cause in the message.
    if err.downcast_ref::<TranslateError>().is_some() {
        print_error(err);
    } else {
        print_error(format_args!("{err:#}"));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Form {
            to,
            model,
            endpoint,
            timeout,
            editor,
        }) => {
            let options = form::FormOptions {
                to,
                model,
                endpoint,
                timeout_secs: timeout,
                editor,
            };
            form::run_form(options).await?;
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                to: args.to,
                model: args.model,
                endpoint: args.endpoint,
                timeout_secs: args.timeout,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
