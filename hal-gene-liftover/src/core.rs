use crate::{
    bed::write_query_bed,
    cli::Args,
    config::Config,
    consts::{QUERY_BED_NAME, TMP_DIR_PREFIX},
    error::{LiftoverError, Result},
};

use log::{debug, info, warn};
use tempfile::{Builder, TempDir};

use std::{
    io,
    path::Path,
    process::{Child, Command, ExitStatus, Stdio},
};

/// Main entry point: validates `args` and runs the liftover pipeline.
pub fn liftover(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    run(&config)
}

/// Runs halLiftover | pslPosTarget for an already validated run.
///
/// The query BED lives in a scratch directory that is removed on every
/// exit path. Both engine exit statuses are checked; the output file may
/// be left truncated if either engine fails.
pub fn run(config: &Config) -> Result<()> {
    let tmp_dir = scratch_dir(config.tmp_dir.as_deref())?;
    debug!("Using scratch directory {}", tmp_dir.path().display());

    let query_bed = tmp_dir.path().join(QUERY_BED_NAME);
    let count = write_query_bed(&config.source, config.flank, &query_bed)?;
    if count == 0 {
        warn!("WARN: no query regions found, output will be empty");
    }

    let mut liftover = spawn_liftover(config, &query_bed)?;
    info!("Started {}", config.hal_liftover.display());

    let normalize_status = match run_normalizer(config, &mut liftover) {
        Ok(status) => status,
        Err(e) => {
            reap(&mut liftover);
            return Err(e);
        }
    };
    let liftover_status = liftover.wait()?;

    check_status(&config.hal_liftover, liftover_status)?;
    check_status(&config.psl_pos_target, normalize_status)?;

    tmp_dir.close()?;
    info!(
        "Lifted {} regions from {} to {} into {}",
        count,
        config.src_genome,
        config.dest_genome,
        config.output_file.display()
    );

    Ok(())
}

fn scratch_dir(parent: Option<&Path>) -> io::Result<TempDir> {
    let mut builder = Builder::new();
    builder.prefix(TMP_DIR_PREFIX);

    match parent {
        Some(parent) => builder.tempdir_in(parent),
        None => builder.tempdir(),
    }
}

/// Starts halLiftover writing PSL to a pipe.
fn spawn_liftover(config: &Config, query_bed: &Path) -> Result<Child> {
    let mut cmd = Command::new(&config.hal_liftover);
    cmd.arg("--outPSL")
        .arg(&config.hal_file)
        .arg(&config.src_genome)
        .arg(query_bed)
        .arg(&config.dest_genome)
        .arg("stdout")
        .stdout(Stdio::piped());

    debug!("Running {:?}", cmd);
    cmd.spawn().map_err(|source| LiftoverError::Spawn {
        program: config.hal_liftover.display().to_string(),
        source,
    })
}

/// Runs pslPosTarget on the liftover pipe and waits for it to exit.
fn run_normalizer(config: &Config, liftover: &mut Child) -> Result<ExitStatus> {
    let pipe = liftover
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("halLiftover stdout is not piped"))?;

    let mut cmd = Command::new(&config.psl_pos_target);
    cmd.arg("stdin")
        .arg(&config.output_file)
        .stdin(Stdio::from(pipe));

    debug!("Running {:?}", cmd);
    let spawned = cmd.spawn();
    // the parent must not keep the read end open, or halLiftover never sees EPIPE
    drop(cmd);

    let mut normalizer = spawned.map_err(|source| LiftoverError::Spawn {
        program: config.psl_pos_target.display().to_string(),
        source,
    })?;
    info!("Started {}", config.psl_pos_target.display());

    Ok(normalizer.wait()?)
}

fn reap(child: &mut Child) {
    if let Err(e) = child.kill() {
        warn!("WARN: cannot kill child process {}: {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        warn!("WARN: cannot wait on child process {}: {}", child.id(), e);
    }
}

fn check_status(program: &Path, status: ExitStatus) -> Result<()> {
    if status.success() {
        debug!("{} exited with {}", program.display(), status);
        return Ok(());
    }

    Err(LiftoverError::ProcessFailed {
        program: program.display().to_string(),
        status,
    })
}
