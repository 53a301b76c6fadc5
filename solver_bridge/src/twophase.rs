//! Bridge to the `twophase` search binary (rob-twophase). The child process
//! is started on the first query and kept alive so its pruning tables stay
//! warm; the single-move primitive is answered locally from the embedded
//! tables.

use std::{
    fs,
    io::{BufRead, BufReader, Write},
    process::{ChildStdin, ChildStdout, Command, Stdio},
    sync::Mutex,
    thread::available_parallelism,
};

use cube_core::{
    facelets::Facelets,
    moves::{parse_sequence, MoveToken},
};
use log::warn;

use crate::{
    solver::{CubeSolver, SolverError},
    tables,
};

type Connection = (ChildStdin, BufReader<ChildStdout>);

/// Solver backed by a long-lived `twophase` child process.
///
/// Solving is a blocking call with no timeout; the search bound below keeps
/// the binary's own runtime reasonable.
pub struct TwophaseSolver {
    connection: Mutex<Option<Connection>>,
    max_moves: u8,
}

impl TwophaseSolver {
    #[must_use]
    pub fn new() -> Self {
        TwophaseSolver {
            connection: Mutex::new(None),
            max_moves: 30,
        }
    }
}

impl Default for TwophaseSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeSolver for TwophaseSolver {
    fn solve(&self, facelets: &Facelets) -> Result<Vec<MoveToken>, SolverError> {
        let mut guard = match self.connection.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let (mut stdin, mut stdout) = match guard.take() {
            Some(connection) => connection,
            None => spawn_twophase(self.max_moves)?,
        };

        let answer = run_query(&mut stdin, &mut stdout, facelets);
        if answer.is_ok() {
            // Keep the warmed-up process; on failure it is dropped and the
            // next query starts fresh.
            *guard = Some((stdin, stdout));
        }

        // The answer looks like `R F2 R' … (17)`. A line without a move
        // count is the solver reporting that it found no solution.
        let answer = answer?;
        let Some((sequence, _)) = answer.trim().rsplit_once('(') else {
            return Err(SolverError::Unsolvable);
        };

        Ok(parse_sequence(sequence)?)
    }

    fn apply(&self, facelets: &Facelets, token: MoveToken) -> Result<Facelets, SolverError> {
        Ok(tables::apply_token(facelets, token))
    }
}

fn spawn_twophase(max_moves: u8) -> Result<Connection, SolverError> {
    // twophase dumps its pruning tables into the working directory; point
    // it at a cache directory instead of wherever we happen to run.
    let mut cache = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    cache.push("twophase-tables");
    fs::create_dir_all(&cache)?;

    let threads = match available_parallelism() {
        Ok(threads) => threads.get(),
        Err(error) => {
            warn!("failed to get available parallelism, defaulting to 1: {error}");
            1
        }
    };

    let mut child = Command::new("twophase")
        .current_dir(cache)
        .args(["-c", "-m", &max_moves.to_string(), "-t", &threads.to_string()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
        return Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe).into());
    };

    Ok((stdin, BufReader::new(stdout)))
}

fn run_query(
    stdin: &mut ChildStdin,
    stdout: &mut BufReader<ChildStdout>,
    facelets: &Facelets,
) -> Result<String, SolverError> {
    // The binary prints banner and table-loading lines, then `Ready!`
    // whenever it can accept a query.
    loop {
        let mut line = String::new();
        if stdout.read_line(&mut line)? == 0 {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }
        if line == "Ready!\n" {
            break;
        }
    }

    writeln!(stdin, "solve {facelets}")?;

    // First answer line is the search time, second the algorithm.
    let mut line = String::new();
    stdout.read_line(&mut line)?;
    let mut answer = String::new();
    stdout.read_line(&mut answer)?;

    Ok(answer)
}
