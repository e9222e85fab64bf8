/*!
# Conflict Graphs

Builds undirected conflict graphs from three kinds of input:

- **Class requests**: two classes conflict if they share the teacher or a student group.
- **Exam plans**: lines `Sem 1: Math 101, Eng 101`; exams of the same semester conflict.
- **Course sections**: every section of a course becomes a session; sessions conflict on a
  shared instructor, otherwise on a shared room, otherwise (optionally) on a shared student
  group inferred from the course id.

Edges are named `{source}-{target}` and carry a color per [`ConflictKind`].
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use super::*;

/// Reason for an edge in a conflict graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    Instructor,
    Room,
    Group,
    Semester,
}

impl ConflictKind {
    /// Edge color used for visualization
    pub fn edge_color(&self) -> &'static str {
        match self {
            ConflictKind::Instructor => "#ef4444",
            ConflictKind::Room => "#eab308",
            ConflictKind::Group | ConflictKind::Semester => "#3b82f6",
        }
    }
}

/// An edge of the conflict graph together with its reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub source: VertexKey,
    pub target: VertexKey,
    pub kind: ConflictKind,
    /// Human readable reason, e.g. `Same Room: LT1`
    pub label: String,
}

/// A conflict graph and the reason of each of its edges; `conflicts[i]` belongs to
/// `graph.edges[i]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConflictGraph {
    pub graph: Graph,
    pub conflicts: Vec<Conflict>,
}

impl ConflictGraph {
    fn new() -> Self {
        Self {
            graph: Graph::new(false),
            conflicts: Vec::new(),
        }
    }

    /// Adds an undirected conflict edge `{source}-{target}`
    fn add_conflict(&mut self, source: &str, target: &str, kind: ConflictKind, label: String) {
        let mut edge = GraphEdge::new(format!("{source}-{target}"), source, target, false);
        edge.color = Some(kind.edge_color().to_string());
        edge.width = Some(2.0);
        self.graph.edges.push(edge);

        self.conflicts.push(Conflict {
            source: source.to_string(),
            target: target.to_string(),
            kind,
            label,
        });
    }

    /// Returns the number of conflicts of the given kind
    pub fn count(&self, kind: ConflictKind) -> usize {
        self.conflicts.iter().filter(|c| c.kind == kind).count()
    }
}

/// A class to be scheduled once per week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRequest {
    pub id: String,
    pub name: String,
    pub teacher: String,
    /// Comma separated student groups
    #[serde(default)]
    pub students: String,
}

impl ClassRequest {
    pub fn new<I, N, T, S>(id: I, name: N, teacher: T, students: S) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        T: Into<String>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            teacher: teacher.into(),
            students: students.into(),
        }
    }

    /// Returns the non-empty student groups
    pub fn groups(&self) -> impl Iterator<Item = &str> + '_ {
        self.students.split(',').map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Kind of a course section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionKind {
    /// Lecture
    L,
    /// Practical
    P,
    /// Tutorial
    T,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectionKind::L => "L",
            SectionKind::P => "P",
            SectionKind::T => "T",
        };
        f.write_str(s)
    }
}

/// A single section of a course as found in a course catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub days: String,
    #[serde(default)]
    pub hours: Vec<u32>,
    #[serde(rename = "type")]
    pub kind: SectionKind,
}

impl Section {
    /// Returns *true* if the section carries neither instructor, room nor days
    pub fn is_empty(&self) -> bool {
        self.instructor.is_empty() && self.room.is_empty() && self.days.is_empty()
    }
}

/// A course with its sections, e.g. `BIO F111`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub credits: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Course {
    /// Returns *false* for rows that are not real courses, e.g. table headers
    pub fn is_valid(&self) -> bool {
        self.id.len() >= 3 && !self.id.contains("COURSE")
    }

    /// Returns the year digit following the first `F` of the id, e.g. `1` for `BIO F111`
    pub fn year(&self) -> Option<char> {
        self.id
            .chars()
            .zip(self.id.chars().skip(1))
            .find(|&(f, d)| f == 'F' && d.is_ascii_digit())
            .map(|(_, d)| d)
    }

    /// Returns the department, i.e. the first word of the id
    pub fn department(&self) -> &str {
        self.id.split(' ').next().unwrap_or_default()
    }

    /// Returns the student groups attending this course: `Year{n}` and `{dept}_Year{n}`
    pub fn groups(&self) -> [String; 2] {
        let year = self
            .year()
            .map_or_else(|| "Unknown".to_string(), |d| d.to_string());
        [
            format!("Year{year}"),
            format!("{}_Year{year}", self.department()),
        ]
    }
}

/// A schedulable session: one section of one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: VertexKey,
    pub label: String,
    pub course_id: String,
    pub kind: SectionKind,
    pub instructor: String,
    pub room: String,
    pub groups: [String; 2],
}

impl Session {
    fn new(course: &Course, section: &Section, index: usize) -> Self {
        let number = if section.section.is_empty() {
            "0"
        } else {
            section.section.as_str()
        };
        let suffix = if section.section.is_empty() {
            String::new()
        } else {
            format!(" ({})", section.section)
        };

        Self {
            id: format!("{}_{}_{number}_{index}", course.id, section.kind),
            label: format!("{} {}{suffix}", course.id, section.kind),
            course_id: course.id.clone(),
            kind: section.kind,
            instructor: section.instructor.clone(),
            room: section.room.clone(),
            groups: course.groups(),
        }
    }

    /// Returns the reason why `self` and `other` cannot share a slot, if any
    fn conflict_with(&self, other: &Session, group_conflicts: bool) -> Option<(ConflictKind, String)> {
        if !self.instructor.is_empty()
            && self.instructor == other.instructor
            && self.instructor.len() > 2
        {
            return Some((
                ConflictKind::Instructor,
                format!("Same Instructor: {}", self.instructor),
            ));
        }

        if !self.room.is_empty() && self.room == other.room && self.room.len() > 1 {
            return Some((ConflictKind::Room, format!("Same Room: {}", self.room)));
        }

        if group_conflicts {
            let common = self.groups.iter().find(|g| other.groups.contains(g))?;
            if common != "YearUnknown" {
                return Some((ConflictKind::Group, format!("Same Group: {common}")));
            }
        }

        None
    }
}

/// A semester and its exams, parsed from `Sem 1: Math 101, Eng 101`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamBlock {
    pub semester: String,
    pub subjects: Vec<String>,
}

/// Parses an exam plan; lines without `:` are ignored
pub fn parse_exam_plan(text: &str) -> Vec<ExamBlock> {
    text.lines()
        .filter_map(|line| {
            let (semester, subjects) = line.split_once(':')?;
            Some(ExamBlock {
                semester: semester.trim().to_string(),
                subjects: subjects
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
            })
        })
        .collect()
}

/// Configurable builder for conflict graphs
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictGraphBuilder {
    group_conflicts: bool,
}

impl ConflictGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also connects course sessions attended by the same student group (off by default).
    /// This produces many edges.
    pub fn group_conflicts(mut self, group_conflicts: bool) -> Self {
        self.group_conflicts = group_conflicts;
        self
    }

    /// Classes conflict if they share the teacher or any student group.
    /// Classes without a teacher never conflict on the teacher.
    pub fn classes(&self, requests: &[ClassRequest]) -> ConflictGraph {
        let mut result = ConflictGraph::new();
        for request in requests {
            result
                .graph
                .add_vertex(Vertex::new(request.id.as_str()).with_label(request.name.as_str()));
        }

        for (i, a) in requests.iter().enumerate() {
            for b in &requests[i + 1..] {
                if a.id == b.id {
                    continue;
                }

                if !a.teacher.is_empty() && a.teacher == b.teacher {
                    result.add_conflict(
                        &a.id,
                        &b.id,
                        ConflictKind::Instructor,
                        format!("Same Teacher: {}", a.teacher),
                    );
                } else if let Some(group) = a.groups().find(|g| b.groups().any(|h| h == *g)) {
                    result.add_conflict(
                        &a.id,
                        &b.id,
                        ConflictKind::Group,
                        format!("Same Group: {group}"),
                    );
                }
            }
        }

        tracing::debug!(
            classes = result.graph.number_of_vertices(),
            conflicts = result.conflicts.len(),
            "built class conflict graph"
        );
        result
    }

    /// Exams of the same semester conflict. Vertices are keyed `{semester}-{subject}` and
    /// labelled with the subject.
    pub fn exam_plan(&self, text: &str) -> ConflictGraph {
        let mut result = ConflictGraph::new();

        for block in parse_exam_plan(text) {
            let keys = block
                .subjects
                .iter()
                .map(|subject| {
                    let key = format!("{}-{subject}", block.semester);
                    result
                        .graph
                        .add_vertex(Vertex::new(key.as_str()).with_label(subject.as_str()));
                    key
                })
                .collect::<Vec<_>>();

            for (i, a) in keys.iter().enumerate() {
                for b in keys[i + 1..].iter().filter(|&b| b != a) {
                    result.add_conflict(
                        a,
                        b,
                        ConflictKind::Semester,
                        format!("Same Semester: {}", block.semester),
                    );
                }
            }
        }

        tracing::debug!(
            exams = result.graph.number_of_vertices(),
            conflicts = result.conflicts.len(),
            "built exam conflict graph"
        );
        result
    }

    /// Flattens courses into sessions and connects conflicting sessions.
    /// Invalid courses and empty sections are skipped.
    pub fn sections(&self, courses: &[Course]) -> (ConflictGraph, Vec<Session>) {
        let sessions = courses
            .iter()
            .filter(|course| course.is_valid())
            .flat_map(|course| {
                course
                    .sections
                    .iter()
                    .enumerate()
                    .filter(|(_, section)| !section.is_empty())
                    .map(move |(index, section)| Session::new(course, section, index))
            })
            .collect::<Vec<_>>();

        let mut result = ConflictGraph::new();
        for session in &sessions {
            result
                .graph
                .add_vertex(Vertex::new(session.id.as_str()).with_label(session.label.as_str()));
        }

        for (i, a) in sessions.iter().enumerate() {
            for b in &sessions[i + 1..] {
                if let Some((kind, label)) = a.conflict_with(b, self.group_conflicts) {
                    result.add_conflict(&a.id, &b.id, kind, label);
                }
            }
        }

        tracing::debug!(
            courses = courses.len(),
            sessions = sessions.len(),
            conflicts = result.conflicts.len(),
            group_conflicts = self.group_conflicts,
            "built section conflict graph"
        );
        (result, sessions)
    }
}
