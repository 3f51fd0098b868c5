use std::process::ExitCode;

use clap::Parser;
use fourfold::{Mesh, Splitter};

mod cli;

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    cli::initialize_tracing(&args.log_filter, args.log_format);

    let mesh = match Mesh::<f32>::from_obj_file(&args.file) {
        Ok(mesh) => mesh,
        Err(e) => {
            tracing::error!(file = %args.file.display(), "failed to load mesh: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        file = %args.file.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "read mesh"
    );

    let splitter = match Splitter::new(mesh) {
        Ok(splitter) => splitter,
        Err(e) => {
            tracing::error!("refusing to split: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&args.out_dir) {
        tracing::error!(dir = %args.out_dir.display(), "couldn't create output directory: {e}");
        return ExitCode::FAILURE;
    }

    let extension = args
        .file
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("obj");

    let mut failed = false;
    for outcome in splitter.export(&args.out_dir, &args.prefix, extension) {
        match outcome {
            Ok(part) => tracing::info!(
                quadrant = part.quadrant.label(),
                path = %part.path.display(),
                vertices = part.vertex_count,
                faces = part.face_count,
                "wrote quadrant"
            ),
            Err(e) => {
                failed = true;
                tracing::error!("quadrant export failed: {e}");
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        tracing::info!("processed");
        ExitCode::SUCCESS
    }
}
