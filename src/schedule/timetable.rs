use std::io::Write;

use indexmap::IndexMap;

use super::*;

/// A colored conflict graph placed onto a [`WeekGrid`]: the color of every vertex is read as
/// its slot. Vertices whose color lies outside the grid are kept aside as overflow.
#[derive(Debug, Clone)]
pub struct Timetable {
    grid: WeekGrid,
    /// Display names per slot; `cells[slot - 1]`
    cells: Vec<Vec<String>>,
    overflow: Vec<(VertexKey, Color)>,
}

impl Timetable {
    /// Places every colored vertex of `graph` in its slot, in vertex order
    pub fn new(grid: &WeekGrid, graph: &Graph, coloring: &Coloring) -> Self {
        let mut cells = vec![Vec::new(); grid.slot_count() as usize];
        let mut overflow = Vec::new();

        for vertex in &graph.vertices {
            let Some(slot) = coloring.color_of(&vertex.key) else {
                continue;
            };

            match grid.position_of(slot) {
                Ok(_) => cells[slot as usize - 1].push(vertex.display_name().to_string()),
                Err(_) => overflow.push((vertex.key.clone(), slot)),
            }
        }

        if !overflow.is_empty() {
            tracing::warn!(
                overflow = overflow.len(),
                slots = grid.slot_count(),
                "vertices scheduled outside the week grid"
            );
        }

        Self {
            grid: grid.clone(),
            cells,
            overflow,
        }
    }

    /// Returns the grid the timetable is laid out on
    pub fn grid(&self) -> &WeekGrid {
        &self.grid
    }

    /// Returns the display names scheduled in a cell; empty for cells outside the grid
    pub fn entries(&self, day: usize, hour: usize) -> &[String] {
        self.grid
            .slot_of(day, hour)
            .map_or(&[][..], |slot| self.cells[slot as usize - 1].as_slice())
    }

    /// Returns the cell content with duplicate names collapsed to `Name (k)`, joined by `; `
    pub fn cell_text(&self, day: usize, hour: usize) -> String {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for name in self.entries(day, hour) {
            *counts.entry(name.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(name, count)| {
                if count > 1 {
                    format!("{name} ({count})")
                } else {
                    name.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Returns the vertices whose slot lies outside the grid
    pub fn overflow(&self) -> &[(VertexKey, Color)] {
        &self.overflow
    }

    /// Returns the number of non-empty cells
    pub fn number_of_used_slots(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Writes the grid as CSV with one row per hour and one column per day.
    /// Fields are quoted only where needed.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        let days = self.grid.days.iter().map(String::as_str);
        csv.write_record(std::iter::once("Time").chain(days))?;
        for hour in 0..self.grid.hours_per_day {
            let cells = (0..self.grid.days.len()).map(|day| self.cell_text(day, hour));
            csv.write_record(std::iter::once(self.grid.hour_label(hour)).chain(cells))?;
        }

        csv.flush()?;
        Ok(())
    }
}
