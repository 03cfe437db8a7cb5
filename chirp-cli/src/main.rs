use std::path::{Path, PathBuf};

use anyhow::Context;
use chirp_core::{Feed, FollowGraph};

/// Collects the details of every failed run, newest last
const EXCEPTION_LOG: &str = "exception.txt";

#[derive(structopt::StructOpt)]
struct Opt {
    /// Path to the follow-graph file
    graph_file: PathBuf,

    /// Path to the posts file
    posts_file: PathBuf,
}

fn run(opt: &Opt) -> anyhow::Result<String> {
    let graph_text = std::fs::read_to_string(&opt.graph_file)
        .with_context(|| format!("reading follow-graph file {:?}", opt.graph_file))?;
    let graph = FollowGraph::parse(&graph_text)
        .with_context(|| format!("parsing follow-graph file {:?}", opt.graph_file))?;
    tracing::debug!(users = graph.len(), "parsed follow graph");

    let posts_text = std::fs::read_to_string(&opt.posts_file)
        .with_context(|| format!("reading posts file {:?}", opt.posts_file))?;
    let feed = Feed::build(&graph, &posts_text)
        .with_context(|| format!("building feeds from posts file {:?}", opt.posts_file))?;
    tracing::debug!("built all feeds");

    Ok(chirp_core::render(&feed))
}

fn append_failure(log: &Path, err: &anyhow::Error) -> anyhow::Result<()> {
    use std::io::Write;
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log)
        .with_context(|| format!("opening {:?} for appending", log))?;
    writeln!(file, "{:?}", err).with_context(|| format!("writing to {:?}", log))?;
    Ok(())
}

fn main() {
    // The report goes to stdout, so diagnostics must stay on stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let opt = <Opt as structopt::StructOpt>::from_args();
    match run(&opt) {
        Ok(report) => println!("{}", report),
        Err(err) => {
            tracing::error!(?err, "run failed");
            println!("Error, see {} for more:\n{:#}", EXCEPTION_LOG, err);
            if let Err(log_err) = append_failure(Path::new(EXCEPTION_LOG), &err) {
                eprintln!("could not write {}: {:#}", EXCEPTION_LOG, log_err);
            }
            std::process::exit(1);
        }
    }
}
