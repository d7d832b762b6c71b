use std::error::Error;
use std::path::{Path, PathBuf};

use floorplan_render::CameraParams;
use log::info;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::cli::Cli;
use crate::job::{Job, write_image};

/// Rotation of frame `i` out of `frames`, starting at `start` degrees.
pub fn frame_rotation(start: f32, i: u32, frames: u32) -> f32 {
    (start + 360.0 * i as f32 / frames as f32).rem_euclid(360.0)
}

/// Decimal places needed to keep `frames` evenly spaced angles distinct.
fn angle_precision(frames: u32) -> usize {
    let mut precision = 0;
    let mut distinct = 360u64;
    while u64::from(frames) > distinct {
        precision += 1;
        distinct *= 10;
    }
    precision
}

/// `<stem>_<deg>.<ext>` next to `base`. Whole degrees up to 360 frames,
/// decimals beyond that.
pub fn frame_path(base: &Path, rotation: f32, frames: u32, ext: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("floorplan");
    let precision = angle_precision(frames);
    let width = if precision == 0 { 3 } else { 4 + precision };
    base.with_file_name(format!("{stem}_{rotation:0width$.precision$}.{ext}"))
}

/// Renders `frames` rotations on a worker pool and writes one file per frame.
/// Returns whether every frame was produced.
pub fn render_all(job: &Job, cli: &Cli, frames: u32) -> Result<bool, Box<dyn Error>> {
    if frames == 0 {
        return Err("--turntable needs at least one frame".into());
    }
    let ext = job.config.output.format.extension();
    let base = cli
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("floorplan.{ext}")));
    let pool = ThreadPoolBuilder::new()
        .num_threads(cli.jobs)
        .thread_name(|i| format!("floorplan-render-{i}"))
        .build()?;
    info!(
        "rendering {frames} frames on {} threads",
        pool.current_num_threads()
    );

    let rendered: Vec<_> = pool.install(|| {
        (0..frames)
            .into_par_iter()
            .map(|i| {
                let camera = CameraParams {
                    rotation_deg: frame_rotation(job.camera.rotation_deg, i, frames),
                    ..job.camera
                };
                (camera.rotation_deg, job.render(&camera))
            })
            .collect()
    });

    let mut ok = true;
    for (rotation, img) in rendered {
        match img {
            Some(img) => write_image(&frame_path(&base, rotation, frames, ext), &img)?,
            None => ok = false,
        }
    }
    Ok(ok)
}
