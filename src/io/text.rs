//! # Text
//!
//! Line-oriented format meant to be typed by hand. Every non-empty, non-comment line is
//! interpreted by the first rule that applies:
//!
//! 1. contains `:` => adjacency line `A: B, C` with targets separated by commas or whitespace
//!    (text after a second `:` is ignored),
//! 2. contains `,` => comma chain `A, B, C` (names may contain spaces),
//! 3. contains `->` => arrow chain `A -> B -> C`,
//! 4. otherwise => whitespace chain `A B C`.
//!
//! Chains connect consecutive names. Vertices are created in order of first mention and edges
//! are numbered `e0, e1, ...` in reading order. Names can therefore not contain `:`, `,` or
//! `->`.

use itertools::Itertools;

use super::*;

/// A GraphReader for the text format
#[derive(Debug, Clone)]
pub struct TextGraphReader {
    directed: bool,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for TextGraphReader {
    fn default() -> Self {
        Self {
            directed: false,
            comment_identifier: "#".to_string(),
        }
    }
}

impl TextGraphReader {
    /// Creates a new (default) reader producing undirected graphs
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the directedness of the produced graph
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Parses a whole string
    pub fn try_read_str(&self, text: &str) -> Result<Graph> {
        self.try_read_graph(text.as_bytes())
    }
}

/// Splits a line into names; `true` marks an adjacency line whose first name is the source
fn split_line(line: &str) -> (Vec<&str>, bool) {
    let non_empty = |s: &&str| !s.is_empty();

    if let Some((source, targets)) = line.split_once(':') {
        let source = source.trim();
        // anything after a second `:` is dropped
        let targets = targets.split(':').next().unwrap_or_default();
        // a line without a source name is ignored entirely
        if source.is_empty() {
            return (Vec::new(), true);
        }

        let names = std::iter::once(source)
            .chain(targets.split(|c: char| c == ',' || c.is_whitespace()))
            .filter(non_empty)
            .collect_vec();
        return (names, true);
    }

    let names = if line.contains(',') {
        line.split(',').map(str::trim).filter(non_empty).collect_vec()
    } else if line.contains("->") {
        line.split("->").map(str::trim).filter(non_empty).collect_vec()
    } else {
        line.split_whitespace().collect_vec()
    };
    (names, false)
}

impl GraphReader for TextGraphReader {
    fn try_read_graph<R>(&self, reader: R) -> Result<Graph>
    where
        R: BufRead,
    {
        let mut graph = Graph::new(self.directed);
        let mut number_of_lines = 0;
        let mut saw_content = false;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            number_of_lines = i + 1;

            let line = line.trim();
            if line.is_empty() || line.starts_with(&self.comment_identifier) {
                continue;
            }
            saw_content = true;

            let (names, is_adjacency) = split_line(line);
            for &name in &names {
                graph.add_vertex(Vertex::new(name));
            }

            if is_adjacency {
                if let Some((source, targets)) = names.split_first() {
                    for target in targets {
                        graph.add_edge(*source, *target);
                    }
                }
            } else {
                for (source, target) in names.iter().tuple_windows() {
                    graph.add_edge(*source, *target);
                }
            }
        }

        if saw_content && graph.vertices.is_empty() {
            return Err(Error::Parse {
                line: number_of_lines,
                message: "no valid vertices found".to_string(),
            });
        }

        tracing::debug!(
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            lines = number_of_lines,
            "read text graph"
        );
        Ok(graph)
    }
}

/// A GraphWriter for the text format.
///
/// Writes one adjacency line `A:` per vertex (preserving vertex order) followed by one arrow
/// line per edge. Edge ids and optional fields are not preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextGraphWriter;

impl TextGraphWriter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphWriter for TextGraphWriter {
    fn try_write_graph<W>(&self, graph: &Graph, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for vertex in &graph.vertices {
            writeln!(writer, "{}:", vertex.key)?;
        }
        for edge in &graph.edges {
            writeln!(writer, "{} -> {}", edge.source, edge.target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn keys(graph: &Graph) -> Vec<&str> {
        graph.vertices.iter().map(|v| v.key.as_str()).collect_vec()
    }

    fn endpoints(graph: &Graph) -> Vec<(&str, &str)> {
        graph
            .edges
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
            .collect_vec()
    }

    #[test]
    fn all_line_kinds() {
        let text = "\
            # a comment\n\
            A: B, C D\n\
            Node 1, Node 2\n\
            X -> Y -> A\n\
            \n\
            P Q\n";

        let graph = TextGraphReader::new().try_read_str(text).unwrap();
        assert_eq!(
            keys(&graph),
            ["A", "B", "C", "D", "Node 1", "Node 2", "X", "Y", "P", "Q"]
        );
        assert_eq!(
            endpoints(&graph),
            [
                ("A", "B"),
                ("A", "C"),
                ("A", "D"),
                ("Node 1", "Node 2"),
                ("X", "Y"),
                ("Y", "A"),
                ("P", "Q"),
            ]
        );
        assert_eq!(graph.edges[6].id, "e6");
        assert!(!graph.directed);
    }

    #[test]
    fn directed_reader() {
        let graph = TextGraphReader::new()
            .directed(true)
            .try_read_str("A -> B")
            .unwrap();
        assert!(graph.directed);
        assert!(graph.edges[0].directed);
    }

    #[test]
    fn single_names_and_empty_adjacency() {
        let graph = TextGraphReader::new().try_read_str("A\nB:\n: C").unwrap();
        assert_eq!(keys(&graph), ["A", "B"]);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn input_without_vertices() {
        assert!(
            TextGraphReader::new()
                .try_read_str("  \n")
                .unwrap()
                .vertices
                .is_empty()
        );

        let result = TextGraphReader::new().try_read_str(": X\n, ,\n");
        assert!(matches!(result, Err(Error::Parse { line: 2, .. })));
    }

    #[test]
    fn extra_colons_are_ignored() {
        let graph = TextGraphReader::new().try_read_str("A: B: C\nD: E F:").unwrap();
        assert_eq!(keys(&graph), ["A", "B", "D", "E", "F"]);
        assert_eq!(endpoints(&graph), [("A", "B"), ("D", "E"), ("D", "F")]);

        let mut buffer = Vec::new();
        TextGraphWriter::new()
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        let read = TextGraphReader::new()
            .try_read_str(std::str::from_utf8(&buffer).unwrap())
            .unwrap();
        assert_eq!(read, graph);
    }

    #[test]
    fn custom_comment_identifier() {
        let graph = TextGraphReader::new()
            .comment_identifier("//")
            .try_read_str("// A B\n#A B")
            .unwrap();
        assert_eq!(keys(&graph), ["#A", "B"]);
    }

    #[test]
    fn writer_output() {
        let graph = TextGraphReader::new().try_read_str("Node 1, B\nC").unwrap();

        let mut buffer = Vec::new();
        TextGraphWriter::new()
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Node 1:\nB:\nC:\nNode 1 -> B\n"
        );
    }
}
