//! Scene command files
//!
//! A scene file is a sequence of lines, each a keyword followed by
//! whitespace separated arguments:
//!
//! ```text
//! png 10 10 out.png
//! position 2  -0.6 -0.6  0.4 -0.6  -0.6 0.4
//! color 3  1 0 0  1 0 0  1 0 0
//! drawArraysTriangles 0 3
//! ```
//!
//! Blank lines and unknown keywords are skipped.
//!
//! ```
//! use softgl::{Pipeline, Source, Rgba8};
//! use softgl::command;
//!
//! let cmds = command::parse("png 4 4 a.png\n\
//!                            position 2 -1 -1 1 -1 -1 1\n\
//!                            color 3 0 0 1 0 0 1 0 0 1\n\
//!                            drawArraysTriangles 0 3").unwrap();
//! let mut pipe = Pipeline::default();
//! command::execute_all(&mut pipe, &cmds, ".").unwrap();
//! let canvas = pipe.finalize().unwrap();
//! assert_eq!(canvas.pixf.get((0,0)), Rgba8::new(0,0,255,255));
//! ```

use crate::error::*;
use crate::pipeline::Pipeline;

use log::{debug, warn};

use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A single scene command
#[derive(Debug,Clone,PartialEq)]
pub enum Command {
    /// `png width height file`
    Png { width: usize, height: usize, output: PathBuf },
    /// `position dim values...`
    Position { dim: usize, values: Vec<f64> },
    /// `color dim values...`
    Color { dim: usize, values: Vec<f64> },
    /// `texcoord 2 values...`
    Texcoord { values: Vec<f64> },
    /// `elements indices...`
    Elements(Vec<usize>),
    /// `drawArraysTriangles first count`
    DrawArrays { first: usize, count: usize },
    /// `drawElementsTriangles count offset`
    DrawElements { count: usize, offset: usize },
    /// `depth`
    Depth,
    /// `sRGB`
    Srgb,
    /// `hyp`
    Hyp,
    /// `cull`
    Cull,
    /// `uniformMatrix` followed by 16 values, column-major
    UniformMatrix([f64; 16]),
    /// `fsaa level`
    Fsaa(usize),
    /// `texture file`
    Texture(PathBuf),
}

/// Words of a single line, with position for error reporting
struct Args<'a> {
    line: usize,
    keyword: &'a str,
    words: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn err<S: Into<String>>(&self, msg: S) -> Error {
        Error::Parse { line: self.line, message: format!("{}: {}", self.keyword, msg.into()) }
    }
    fn exactly(&self, n: usize) -> Result<()> {
        if self.words.len() != n {
            return Err(self.err(format!("expected {} arguments, found {}", n, self.words.len())));
        }
        Ok(())
    }
    fn at_least(&self, n: usize) -> Result<()> {
        if self.words.len() < n {
            return Err(self.err(format!("expected at least {} arguments, found {}", n, self.words.len())));
        }
        Ok(())
    }
    fn num<T: FromStr>(&self, word: &str) -> Result<T> {
        word.parse().map_err(|_| self.err(format!("bad number {:?}", word)))
    }
    fn arg<T: FromStr>(&self, i: usize) -> Result<T> {
        self.num(self.words[i])
    }
    fn rest<T: FromStr>(&self, from: usize) -> Result<Vec<T>> {
        self.words[from ..].iter().map(|w| self.num(w)).collect()
    }
}

/// Parse one line
///
/// Returns `None` for blank lines and unknown keywords
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>> {
    let mut words = text.split_whitespace();
    let keyword = match words.next() {
        Some(k) => k,
        None => return Ok(None),
    };
    let a = Args { line, keyword, words: words.collect() };
    let cmd = match keyword {
        "png" => {
            a.exactly(3)?;
            Command::Png { width: a.arg(0)?, height: a.arg(1)?, output: PathBuf::from(a.words[2]) }
        }
        "position" => {
            a.at_least(1)?;
            Command::Position { dim: a.arg(0)?, values: a.rest(1)? }
        }
        "color" => {
            a.at_least(1)?;
            Command::Color { dim: a.arg(0)?, values: a.rest(1)? }
        }
        "texcoord" => {
            a.at_least(1)?;
            let dim: usize = a.arg(0)?;
            if dim != 2 {
                return Err(a.err(format!("texture coordinates have 2 components, not {}", dim)));
            }
            Command::Texcoord { values: a.rest(1)? }
        }
        "elements" => Command::Elements(a.rest(0)?),
        "drawArraysTriangles" => {
            a.exactly(2)?;
            Command::DrawArrays { first: a.arg(0)?, count: a.arg(1)? }
        }
        "drawElementsTriangles" => {
            a.exactly(2)?;
            Command::DrawElements { count: a.arg(0)?, offset: a.arg(1)? }
        }
        "depth" => Command::Depth,
        "sRGB" => Command::Srgb,
        "hyp" => Command::Hyp,
        "cull" => Command::Cull,
        "uniformMatrix" => {
            a.exactly(16)?;
            let mut m = [0.0; 16];
            for (i, v) in m.iter_mut().enumerate() {
                *v = a.arg(i)?;
            }
            Command::UniformMatrix(m)
        }
        "fsaa" => {
            a.exactly(1)?;
            Command::Fsaa(a.arg(0)?)
        }
        "texture" => {
            a.exactly(1)?;
            Command::Texture(PathBuf::from(a.words[0]))
        }
        _ => {
            warn!("line {}: unknown keyword {:?}, skipped", line, keyword);
            return Ok(None);
        }
    };
    Ok(Some(cmd))
}

/// Parse a complete scene file, lines numbered from 1
pub fn parse(text: &str) -> Result<Vec<Command>> {
    let mut out = vec![];
    for (i, line) in text.lines().enumerate() {
        if let Some(cmd) = parse_line(i + 1, line)? {
            out.push(cmd);
        }
    }
    debug!("PARSE: {} commands", out.len());
    Ok(out)
}

/// Apply a command to the pipeline
///
/// Texture paths are resolved relative to `base`
pub fn execute<P: AsRef<Path>>(pipe: &mut Pipeline, cmd: &Command, base: P) -> Result<()> {
    match cmd {
        Command::Png { width, height, output } => pipe.init_canvas(*width, *height, output),
        Command::Position { dim, values } => pipe.set_positions(*dim, values),
        Command::Color { dim, values } => pipe.set_colors(*dim, values),
        Command::Texcoord { values } => pipe.set_texcoords(values),
        Command::Elements(values) => pipe.set_indices(values),
        Command::DrawArrays { first, count } => pipe.draw_arrays(*first, *count),
        Command::DrawElements { count, offset } => pipe.draw_indexed(*count, *offset),
        Command::Depth => pipe.enable_depth_test(),
        Command::Srgb => {
            pipe.enable_srgb();
            Ok(())
        }
        Command::Hyp => {
            pipe.enable_perspective_correction();
            Ok(())
        }
        Command::Cull => {
            pipe.enable_backface_cull();
            Ok(())
        }
        Command::UniformMatrix(m) => {
            pipe.set_transform(*m);
            Ok(())
        }
        Command::Fsaa(level) => pipe.enable_supersampling(*level),
        Command::Texture(path) => pipe.bind_texture(base.as_ref().join(path)),
    }
}

/// Apply every command in order, stopping at the first error
pub fn execute_all<P: AsRef<Path>>(pipe: &mut Pipeline, cmds: &[Command], base: P) -> Result<()> {
    for cmd in cmds {
        execute(pipe, cmd, base.as_ref())?;
    }
    Ok(())
}
