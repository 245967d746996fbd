use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;

pub fn run(cli: Cli) -> Result<()> {
    let ctx = ExecutionContext::new(cli.data_dir.as_deref(), cli.archive.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&ctx)?;
        return Ok(());
    };

    match command {
        Commands::List {
            owner,
            prefix,
            interactive,
            no_gap,
        } => handlers::list::handle(&ctx, owner, prefix, interactive, no_gap, cli.format),

        Commands::Files { job_id } => handlers::files::handle(&ctx, &job_id, cli.format),

        Commands::View { job_id, spool_id } => {
            handlers::view::handle(&ctx, &job_id, spool_id, cli.format)
        }

        Commands::Status { job_id } => handlers::status::handle(&ctx, &job_id, cli.format),
    }
}

fn show_guidance(ctx: &ExecutionContext) -> Result<()> {
    let archive_root = ctx.archive_root()?;

    let heading = "jespool - JES spool archive browser";
    if std::io::stdout().is_terminal() {
        println!("{}\n", heading.bold());
    } else {
        println!("{}\n", heading);
    }

    if archive_root.join("jobs.json").exists() {
        println!("Quick commands:");
        println!("  jespool list                      # List jobs in the archive");
        println!("  jespool list --interactive        # Drill down to spool content");
        println!("  jespool files <JOBID>             # List the spool files of a job");
        println!("  jespool view <JOBID> <SPOOL-ID>   # Print one spool file\n");
    } else {
        println!("No spool archive found at {}.", archive_root.display());
        println!("\nPoint jespool at an archive:");
        println!("  jespool --archive <DIR> list");
        println!("  JESPOOL_PATH=<DATA-DIR> jespool list");
        println!("  # or set [archive] root in {}\n", ctx.config_path().display());
    }

    println!("For more commands:");
    println!("  jespool --help");
    Ok(())
}
