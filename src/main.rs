//! CLI entry point for arbor

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use arbor::tree::{DEFAULT_INDENT, MIN_INDENT};
use arbor::{ConsoleFormatter, Error, TreeWalker, WalkerConfig};
use clap::{ArgAction, Parser};

/// Decide on color once: `-C` wins over `-n`, otherwise only color a terminal.
fn should_use_color(force_color: bool, no_color: bool) -> bool {
    if force_color {
        return true;
    }
    if no_color {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Parse `--indent`, which has to leave room for a connector and a space.
fn parse_indent(s: &str) -> Result<usize, String> {
    let indent: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", s))?;
    if indent < MIN_INDENT {
        return Err(format!("must be at least {}", MIN_INDENT));
    }
    Ok(indent)
}

/// Pretty listing of directory structures.
///
/// Sequentially print the tree of each path.
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Args {
    /// Paths to display
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// List hidden files / directories
    #[arg(short = 'a')]
    list_hidden: bool,

    /// List only directories
    #[arg(short = 'd')]
    list_only_dirs: bool,

    /// Print the full path prefix
    #[arg(short = 'f')]
    full_path: bool,

    /// Print the group name (or GID #)
    #[arg(short = 'g')]
    group: bool,

    /// Print the size of each file (human-readable)
    #[arg(short = 'h')]
    nice_size: bool,

    /// No visual tree or indentation
    #[arg(short = 'i')]
    ignore_tree: bool,

    /// Descend into symbolic links
    #[arg(short = 'l')]
    follow_links: bool,

    /// Turn off colors (overridden by -C)
    #[arg(short = 'n')]
    no_color: bool,

    /// Print file type and permissions
    #[arg(short = 'p')]
    permissions: bool,

    /// Sort the output in reverse (alphabetic by default)
    #[arg(short = 'r')]
    reverse: bool,

    /// Print the size of each file in bytes
    #[arg(short = 's')]
    size: bool,

    /// Sort the output by last modification time
    #[arg(short = 't')]
    time: bool,

    /// Print the username (or UID #)
    #[arg(short = 'u')]
    user: bool,

    /// Turn on colors (overrides -n)
    #[arg(short = 'C')]
    force_color: bool,

    /// Print the date of the last modification time
    #[arg(short = 'D')]
    date: bool,

    /// Tree indent level (minimum of 2)
    #[arg(long, default_value_t = DEFAULT_INDENT, value_parser = parse_indent)]
    indent: usize,

    /// Skip the file / directory summary
    #[arg(long = "noreport")]
    no_report: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Args {
    fn walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            paths: self.paths.clone(),
            list_hidden: self.list_hidden,
            list_only_dirs: self.list_only_dirs,
            full_path: self.full_path,
            show_group: self.group,
            show_user: self.user,
            show_permissions: self.permissions,
            show_size: self.size,
            show_nice_size: self.nice_size,
            show_date: self.date,
            ignore_tree: self.ignore_tree,
            follow_links: self.follow_links,
            no_color: self.no_color,
            force_color: self.force_color,
            reverse: self.reverse,
            sort_by_time: self.time,
            indent: self.indent,
            report: !self.no_report,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.walker_config();
    let use_color = should_use_color(config.force_color, config.no_color);

    let walker = TreeWalker::new(config).unwrap_or_else(|e| {
        eprintln!("arbor: {}", e);
        process::exit(1);
    });

    let mut formatter = ConsoleFormatter::stdout(use_color);
    match walker.run(&mut formatter) {
        Ok(_) => {}
        Err(Error::Io(e)) => {
            eprintln!("arbor: error writing output: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("arbor: {}", e);
            process::exit(1);
        }
    }
}
