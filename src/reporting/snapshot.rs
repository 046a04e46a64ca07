use std::io::{self, Write};

use crate::simulation::states::Body;

/// Observer invoked at step boundaries with the current bodies
///
/// Purely side-effecting: the simulation never reads anything back.
pub trait Reporter {
    fn report(&mut self, step: u64, bodies: &[Body]) -> io::Result<()>;
}

impl<F> Reporter for F
where
    F: FnMut(u64, &[Body]) -> io::Result<()>,
{
    fn report(&mut self, step: u64, bodies: &[Body]) -> io::Result<()> {
        self(step, bodies)
    }
}

pub const SNAPSHOT_HEADER: &str = "OBJ_ID, MASS, POS_X, POS_Y, VEL_X, VEL_Y, TIME";

/// Writes a status table of every body, one line per body
pub struct SnapshotWriter<W: Write> {
    out: W,
}

impl<W: Write> SnapshotWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for SnapshotWriter<W> {
    fn report(&mut self, step: u64, bodies: &[Body]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{SNAPSHOT_HEADER}")?;

        for (i, b) in bodies.iter().enumerate() {
            writeln!(
                self.out,
                "{}, {:.6}, {:.6}, {:.6}, {:.6}, {:.6}, {}",
                i, b.m, b.x.x, b.x.y, b.v.x, b.v.y, step
            )?;
        }

        self.out.flush()
    }
}

/// Keeps a full copy of the bodies at every reported step
#[derive(Debug, Default)]
pub struct TrajectoryRecorder {
    pub frames: Vec<(u64, Vec<Body>)>,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for TrajectoryRecorder {
    fn report(&mut self, step: u64, bodies: &[Body]) -> io::Result<()> {
        self.frames.push((step, bodies.to_vec()));
        Ok(())
    }
}
