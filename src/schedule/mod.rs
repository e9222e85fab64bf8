/*!
# Scheduling

Timetabling on top of the coloring engine: courses, exams or class sections become vertices,
two vertices conflict if they must not share a time slot, and a coloring of the resulting
conflict graph assigns each vertex a slot.

- [`WeekGrid`] maps slots `1..=days * hours` to (day, hour) cells,
- [`ConflictGraphBuilder`] turns class requests, exam plans or course sections into a
  conflict graph,
- [`Timetable`] places a colored conflict graph onto a week grid and exports it as CSV.

```rust
use graphtour::{algo::*, schedule::*};

let plan = "Sem 1: Math 101, Eng 101\nSem 2: Physics 101";
let conflicts = ConflictGraphBuilder::new().exam_plan(plan);

let grid = WeekGrid::default();
let coloring = balanced_coloring(
    &conflicts.graph.vertices,
    &conflicts.graph.edges,
    grid.slot_count(),
);

let timetable = Timetable::new(&grid, &conflicts.graph, &coloring);
assert_eq!(timetable.cell_text(0, 0), "Math 101");
assert_eq!(timetable.cell_text(0, 1), "Eng 101");
assert_eq!(timetable.cell_text(0, 2), "Physics 101");
```
*/

mod constraints;
mod slots;
mod timetable;

use crate::{
    algo::Coloring,
    error::{Error, Result},
    model::*,
    node::VertexKey,
};

pub use constraints::*;
pub use slots::*;
pub use timetable::*;
