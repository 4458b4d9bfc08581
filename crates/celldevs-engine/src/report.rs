//! Semicolon-separated result log.
//!
//! [`CsvLogger`] writes one row per cell:
//!
//! ```text
//! time;model_id;model_name;state
//! 5;0;<0,0>;<100;0.99;0.01;0>
//! ```
//!
//! `model_name` is the cell's grid coordinate and `state` is the model's
//! `Display` rendering. Times are printed with six significant digits. The header is written on construction.

use std::fmt::Display;
use std::io::{self, Write};

use celldevs_core::{Coord, General, Time};
use celldevs_space::Space;

/// First line of every log.
pub const LOG_HEADER: &str = "time;model_id;model_name;state";

/// Writes simulation results to any `Write` sink.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and the CLI can use
/// `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use celldevs_engine::CsvLogger;
/// use celldevs_space::Moore;
///
/// let space = Moore::square(2).unwrap();
/// let mut buf = Vec::new();
/// let mut log = CsvLogger::new(&mut buf).unwrap();
/// log.write_cells(3.0, &space, ["a", "b", "c", "d"]).unwrap();
/// log.finish().unwrap();
///
/// let text = String::from_utf8(buf).unwrap();
/// let lines: Vec<&str> = text.lines().collect();
/// assert_eq!(lines[0], "time;model_id;model_name;state");
/// assert_eq!(lines[4], "3;3;<1,1>;d");
/// ```
pub struct CsvLogger<W: Write> {
    writer: W,
    rows_written: u64,
}

impl<W: Write> CsvLogger<W> {
    /// Create a logger, immediately writing the header line.
    pub fn new(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "{LOG_HEADER}")?;
        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Write a single row.
    pub fn write_row(
        &mut self,
        time: Time,
        id: usize,
        coord: &Coord,
        state: &impl Display,
    ) -> io::Result<()> {
        write!(self.writer, "{};{id};<", General(time))?;
        for (axis, c) in coord.iter().enumerate() {
            if axis > 0 {
                self.writer.write_all(b",")?;
            }
            write!(self.writer, "{c}")?;
        }
        writeln!(self.writer, ">;{state}")?;
        self.rows_written += 1;
        Ok(())
    }

    /// Write one row per cell, `states` in canonical order of `space`.
    ///
    /// Returns the number of rows written. Fails with
    /// `InvalidInput` if there are more states than cells.
    pub fn write_cells<S, I>(&mut self, time: Time, space: &dyn Space, states: I) -> io::Result<u64>
    where
        S: Display,
        I: IntoIterator<Item = S>,
    {
        let mut n = 0;
        for (id, state) in states.into_iter().enumerate() {
            let coord = space.coord_of(id).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("cell {id} is outside a space of {} cells", space.cell_count()),
                )
            })?;
            self.write_row(time, id, &coord, &state)?;
            n += 1;
        }
        Ok(n)
    }

    /// Number of data rows written (header excluded).
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
