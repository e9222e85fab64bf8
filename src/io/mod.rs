/*!
# IO

Utilities for reading and writing [`Graph`] models from and to different file formats.

## Formats

- **Json**: the serde representation of [`Graph`] (`vertices`, `edges`, `directed`).
- **Text**: a line-oriented format for quickly typing graphs, see [`TextGraphReader`].
  Each line is one of
  - `A: B, C` (adjacency line, edges `A-B` and `A-C`),
  - `A, B, C` (comma chain, names may contain spaces),
  - `A -> B -> C` (arrow chain),
  - `A B C` (whitespace chain).

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

mod json;
mod text;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    error::{Error, Result},
    model::*,
};

pub use json::*;
pub use text::*;

/// Identifier for a graph file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// serde_json representation of the graph model
    Json,
    /// Line-oriented adjacency/chain format
    Text,
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "text" | "txt" => Ok(FileFormat::Text),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl FileFormat {
    /// Guesses the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))?
            .parse()
    }
}

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<Graph>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    fn try_read_graph_file<P>(&self, path: P) -> Result<Graph>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    fn try_write_graph<W>(&self, graph: &Graph, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    fn try_write_graph_file<P>(&self, graph: &Graph, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    /// Text input is read as an undirected graph.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl GraphRead for Graph {
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::Json => JsonGraphReader::new().try_read_graph(reader),
            FileFormat::Text => TextGraphReader::new().try_read_graph(reader),
        }
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl GraphWrite for Graph {
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Json => JsonGraphWriter::new().try_write_graph(self, writer),
            FileFormat::Text => TextGraphWriter::new().try_write_graph(self, writer),
        }
    }
}
