use super::*;

/// Reads the serde representation of a [`Graph`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGraphReader;

impl JsonGraphReader {
    pub fn new() -> Self {
        Self
    }
}

impl GraphReader for JsonGraphReader {
    fn try_read_graph<R>(&self, reader: R) -> Result<Graph>
    where
        R: BufRead,
    {
        let graph: Graph = serde_json::from_reader(reader)?;
        tracing::debug!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "read json graph"
        );
        Ok(graph)
    }
}

/// Writes the serde representation of a [`Graph`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGraphWriter {
    pretty: bool,
}

impl JsonGraphWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables indented output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl GraphWriter for JsonGraphWriter {
    fn try_write_graph<W>(&self, graph: &Graph, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, graph)?;
        } else {
            serde_json::to_writer(&mut writer, graph)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
