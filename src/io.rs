//! Plain-text problem I/O.
//!
//! Parses the whitespace-token input format into domain models and
//! serializes staffings back out. Instances are addressed by a short
//! symbolic name which `DataStore` maps onto a file convention:
//! `input_data/{name}.in.txt` in, `output_data/{name}.out.txt` out.
//!
//! # Format
//!
//! ```text
//! <num_contributors> <num_projects>
//! per contributor:  <name> <num_skills>, then <skill> <level> lines
//! per project:      <name> <length> <points> <best_before> <num_roles>,
//!                   then <role> <level> lines
//! ```
//!
//! Tokens are split on a single space; no quoting, no escaping, no
//! blank-line tolerance. Reading stops at the declared counts and any
//! trailing content is ignored. Malformed input fails fast with no
//! recovery.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::models::{Contributor, Project, Staffing};

/// A parsed problem instance.
#[derive(Debug, Clone)]
pub struct Problem {
    /// Contributor pool, in input order (scan order matters downstream).
    pub contributors: Vec<Contributor>,
    /// Projects, in input order.
    pub projects: Vec<Project>,
}

/// Syntactic failure while parsing a problem instance.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A line had the wrong number of space-separated tokens.
    #[error("line {line}: expected {expected} tokens, found {found}")]
    TokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A token failed to parse as the expected integer type.
    #[error("line {line}: invalid integer '{token}'")]
    InvalidInteger { line: usize, token: String },
    /// Declared counts exceed the available lines.
    #[error("line {line}: unexpected end of input")]
    UnexpectedEof { line: usize },
    /// Underlying read failure.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure loading or storing an instance through a [`DataStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// File could not be opened, created, or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Input file exists but is malformed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Line-oriented token reader with 1-based position tracking.
struct LineReader<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }

    /// Reads the next line and splits it into exactly `expected` tokens.
    fn read_record(&mut self, expected: usize) -> Result<Vec<String>, ParseError> {
        let mut buf = String::new();
        self.line += 1;
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            return Err(ParseError::UnexpectedEof { line: self.line });
        }

        let trimmed = buf.trim_end_matches(|c| c == '\n' || c == '\r');
        let tokens: Vec<&str> = trimmed.split(' ').collect();
        if tokens.len() != expected {
            return Err(ParseError::TokenCount {
                line: self.line,
                expected,
                found: tokens.len(),
            });
        }
        Ok(tokens.into_iter().map(str::to_owned).collect())
    }

    /// Parses a token from the current line as an integer type.
    fn parse_num<T: FromStr>(&self, token: &str) -> Result<T, ParseError> {
        token.parse().map_err(|_| ParseError::InvalidInteger {
            line: self.line,
            token: token.to_owned(),
        })
    }
}

/// Parses a problem instance from any buffered reader.
///
/// Consumes exactly the declared record counts; trailing lines are
/// neither read nor validated.
pub fn parse_problem<R: BufRead>(reader: R) -> Result<Problem, ParseError> {
    let mut lines = LineReader::new(reader);

    let header = lines.read_record(2)?;
    let num_contributors: usize = lines.parse_num(&header[0])?;
    let num_projects: usize = lines.parse_num(&header[1])?;

    let mut contributors = Vec::with_capacity(num_contributors);
    for _ in 0..num_contributors {
        let head = lines.read_record(2)?;
        let num_skills: usize = lines.parse_num(&head[1])?;

        let mut contributor = Contributor::new(&head[0]);
        for _ in 0..num_skills {
            let skill = lines.read_record(2)?;
            let level: i32 = lines.parse_num(&skill[1])?;
            contributor = contributor.with_skill(&skill[0], level);
        }
        contributors.push(contributor);
    }

    let mut projects = Vec::with_capacity(num_projects);
    for _ in 0..num_projects {
        let head = lines.read_record(5)?;
        let mut project = Project::new(&head[0])
            .with_length(lines.parse_num(&head[1])?)
            .with_points(lines.parse_num(&head[2])?)
            .with_best_before(lines.parse_num(&head[3])?);
        let num_roles: usize = lines.parse_num(&head[4])?;

        for _ in 0..num_roles {
            let role = lines.read_record(2)?;
            let level: i32 = lines.parse_num(&role[1])?;
            project = project.with_role(&role[0], level);
        }
        projects.push(project);
    }

    Ok(Problem {
        contributors,
        projects,
    })
}

/// Writes a staffing in the output format: the filled count, then per
/// project its name and the space-joined roster in role order.
pub fn write_staffing<W: Write>(mut writer: W, staffing: &Staffing) -> std::io::Result<()> {
    writeln!(writer, "{}", staffing.filled_count())?;
    for filled in &staffing.filled {
        writeln!(writer, "{}", filled.name)?;
        writeln!(writer, "{}", filled.contributors.join(" "))?;
    }
    Ok(())
}

/// File-backed instance store keyed by symbolic name.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    /// Creates a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the input file for an instance name.
    pub fn input_path(&self, name: &str) -> PathBuf {
        self.root.join("input_data").join(format!("{name}.in.txt"))
    }

    /// Path of the output file for an instance name.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.root.join("output_data").join(format!("{name}.out.txt"))
    }

    /// Loads and parses the named problem instance.
    pub fn load(&self, name: &str) -> Result<Problem, StoreError> {
        let path = self.input_path(name);
        debug!(path = %path.display(), "loading instance");
        let file = File::open(&path).map_err(StoreError::Io)?;
        Ok(parse_problem(BufReader::new(file))?)
    }

    /// Writes a staffing for the named instance.
    ///
    /// The output directory is created if missing.
    pub fn store(&self, name: &str, staffing: &Staffing) -> Result<(), StoreError> {
        let path = self.output_path(name);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        debug!(path = %path.display(), "writing staffing");
        let mut writer = BufWriter::new(File::create(&path)?);
        write_staffing(&mut writer, staffing)?;
        writer.flush()?;
        Ok(())
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
