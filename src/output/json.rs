//! JSON lines output

use std::io::{self, BufWriter, Stdout, Write};

use serde::Serialize;

use crate::record::{Record, RecordSink};

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    record: &'a Record,
    depth: usize,
}

/// Writes one JSON object per record, newline separated.
pub struct JsonFormatter<W: Write> {
    out: W,
}

impl JsonFormatter<BufWriter<Stdout>> {
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()))
    }
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for JsonFormatter<W> {
    fn record(&mut self, record: &Record, indent_depth: usize) -> io::Result<()> {
        let line = JsonLine {
            record,
            depth: indent_depth,
        };
        serde_json::to_writer(&mut self.out, &line).map_err(io::Error::other)?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
