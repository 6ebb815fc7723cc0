// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line configuration.
//!
//! Flags are written with a single dash and a full word (`-in`,
//! `-width`), each followed by its value as a separate argument.  clap
//! only knows single-letter short flags, so those words are rewritten
//! to their `--` long form before matching.

use crate::error::SeamError;
use clap::{value_t, App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

const LONG_FLAGS: [&str; 4] = ["in", "out", "width", "height"];

/// Which binary is parsing its arguments.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Tool {
    /// `seamcarve`: input, output, and seam counts.
    Carve,
    /// `seamenergy`: input and output only.
    Energy,
}

/// Everything a run needs to know.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Vertical seams to remove.
    pub width: u32,
    /// Horizontal seams to remove.
    pub height: u32,
}

fn app(tool: Tool) -> App<'static, 'static> {
    let (name, about) = match tool {
        Tool::Carve => ("seamcarve", "Content-aware image shrinking by seam carving"),
        Tool::Energy => ("seamenergy", "Render the gradient energy map of an image"),
    };
    let app = App::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .arg(
            Arg::with_name("in")
                .long("in")
                .value_name("PATH")
                .help("The image to read")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .value_name("PATH")
                .help("Where to write the result")
                .takes_value(true)
                .required(true),
        );
    if tool == Tool::Energy {
        return app;
    }
    app.arg(
        Arg::with_name("width")
            .long("width")
            .value_name("N")
            .help("Number of vertical seams to remove")
            .takes_value(true)
            .default_value("0"),
    )
    .arg(
        Arg::with_name("height")
            .long("height")
            .value_name("N")
            .help("Number of horizontal seams to remove")
            .takes_value(true)
            .default_value("0"),
    )
}

// `-in` becomes `--in`; anything else, values included, passes through.
fn normalize(arg: OsString) -> OsString {
    match arg.to_str() {
        Some(flag) if flag.starts_with('-') && LONG_FLAGS.contains(&&flag[1..]) => {
            let mut long = OsString::from("-");
            long.push(&arg);
            long
        }
        _ => arg,
    }
}

fn seam_count(matches: &ArgMatches, name: &str) -> Result<u32, SeamError> {
    if !matches.is_present(name) {
        return Ok(0);
    }
    value_t!(matches, name, u32).map_err(SeamError::Arguments)
}

impl Options {
    /// Parse a full argument list, program name first.
    pub fn from_args<I, T>(tool: Tool, args: I) -> Result<Self, SeamError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = args.into_iter().map(|arg| normalize(arg.into()));
        let matches = app(tool)
            .get_matches_from_safe(args)
            .map_err(SeamError::Arguments)?;

        Ok(Options {
            input: PathBuf::from(matches.value_of_os("in").unwrap_or_default()),
            output: PathBuf::from(matches.value_of_os("out").unwrap_or_default()),
            width: seam_count(&matches, "width")?,
            height: seam_count(&matches, "height")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, SeamError> {
        Options::from_args(Tool::Carve, std::iter::once("seamcarve").chain(args.iter().cloned()))
    }

    #[test]
    fn single_dash_flags_are_understood() {
        let options =
            parse(&["-in", "a.png", "-out", "b.png", "-width", "3", "-height", "2"]).unwrap();
        assert_eq!(
            options,
            Options {
                input: PathBuf::from("a.png"),
                output: PathBuf::from("b.png"),
                width: 3,
                height: 2,
            }
        );
    }

    #[test]
    fn seam_counts_default_to_zero() {
        let options = parse(&["-out", "b.png", "-in", "a.png"]).unwrap();
        assert_eq!((options.width, options.height), (0, 0));
    }

    #[test]
    fn values_that_look_like_flags_are_left_alone() {
        let options = parse(&["-in", "in", "-out", "width"]).unwrap();
        assert_eq!(options.input, PathBuf::from("in"));
        assert_eq!(options.output, PathBuf::from("width"));
    }

    #[test]
    fn input_is_required() {
        match parse(&["-out", "b.png"]) {
            Err(SeamError::Arguments(e)) => {
                assert_eq!(e.kind, clap::ErrorKind::MissingRequiredArgument)
            }
            other => panic!("expected a missing argument, got {:?}", other),
        }
    }

    #[test]
    fn seam_counts_must_be_numbers() {
        assert!(parse(&["-in", "a.png", "-out", "b.png", "-width", "lots"]).is_err());
        assert!(parse(&["-in", "a.png", "-out", "b.png", "-height", "-1"]).is_err());
    }

    #[test]
    fn the_energy_tool_takes_no_seam_counts() {
        let args = ["seamenergy", "-in", "a.png", "-out", "e.png"];
        let options = Options::from_args(Tool::Energy, args.iter().cloned()).unwrap();
        assert_eq!(options.width, 0);
        let extra = ["seamenergy", "-in", "a.png", "-out", "e.png", "-width", "1"];
        assert!(Options::from_args(Tool::Energy, extra.iter().cloned()).is_err());
    }
}
