//! Human-readable report lines.
//!
//! Every line the probe prints goes through here, so the wording lives in one
//! place and tests can capture it by handing in a `Vec<u8>`.

use std::io::{self, Write};

/// Writes the numbered diagnostic lines to any `Write` sink.
pub struct Report<W: Write> {
    out: W,
}

impl<W: Write> Report<W> {
    /// Wraps `out`; nothing is written until a line method is called.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Preamble naming the probed site.
    pub fn header(&mut self, base_url: &str) -> io::Result<()> {
        writeln!(self.out, "Analyzing {base_url}...")
    }

    /// Final status of the root page.
    pub fn root_status(&mut self, status: u16) -> io::Result<()> {
        writeln!(self.out, "1. Status Code: {status}")
    }

    /// First redirect source and the final URL.
    pub fn redirect(&mut self, from: &str, to: &str) -> io::Result<()> {
        writeln!(self.out, "2. Redirected from: {from}")?;
        writeln!(self.out, "   Redirected to: {to}")
    }

    /// One line per inline script that references the chunk loader.
    pub fn chunk_script(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "3. Found Next.js chunks - this is a client-side rendered app"
        )
    }

    /// Final status of the login page, after a blank line.
    pub fn login_status(&mut self, status: u16) -> io::Result<()> {
        writeln!(self.out, "\n4. Login page status: {status}")
    }

    /// Number of JavaScript preload links on the root page.
    pub fn preload_scripts(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "\n5. Found {count} JavaScript files")
    }

    /// Heading printed before the candidate checks.
    pub fn candidates_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n6. Checking for manifest files...")
    }

    /// Only printed for candidates that answered 200.
    pub fn candidate_found(&mut self, path: &str) -> io::Result<()> {
        writeln!(self.out, "   - Found: {path}")
    }

    /// The single line printed when the run aborts.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Error: {message}")
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
