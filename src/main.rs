//! Rust3D - transform pipeline demo
//!
//! Loads the camera and scene from configuration, builds the
//! model-view-projection matrix and logs where every scene point lands.

use rust3d::config::AppConfig;
use rust3d::pipeline::Pipeline;
use rust3d_math::Vec3;

fn main() {
    // Config is loaded before the logger so its log level can seed the filter
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Rust3D");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let pipeline = Pipeline::from_config(&config);
    let mvp = pipeline.model_view_projection();

    log::info!(
        "Camera at {:?} looking at {:?} (fov {} deg, aspect {:.3})",
        config.camera.eye, config.camera.target, config.camera.fov, config.camera.aspect
    );
    log::debug!("Model matrix:\n{}", pipeline.model);
    log::debug!("View matrix:\n{}", pipeline.view);
    log::debug!("Projection matrix:\n{}", pipeline.projection);
    log::info!("Model-view-projection:\n{}", mvp);

    let det = mvp.determinant();
    log::info!("MVP determinant: {}", det);
    match mvp.try_inverse() {
        Some(inverse) if mvp * inverse == rust3d_math::Mat4::IDENTITY => {
            log::info!("MVP inverse round-trips to identity");
        }
        Some(_) => log::warn!("MVP inverse drifted beyond tolerance"),
        None => log::warn!("MVP is singular"),
    }

    let mut visible = 0;
    for point in &config.scene.points {
        let point = Vec3::from(*point);
        let projected = pipeline.project(point);
        match projected.ndc {
            Some(ndc) => log::info!(
                "{:?} -> clip {:?} w={:.4} ndc {:?}{}",
                point.to_array(),
                projected.clip.to_array(),
                projected.w,
                ndc.to_array(),
                if projected.is_visible() { "" } else { " (clipped)" }
            ),
            None => log::warn!("{:?} lies on the camera plane, no NDC", point.to_array()),
        }
        if projected.is_visible() {
            visible += 1;
        }
    }

    log::info!("{} of {} points visible", visible, config.scene.points.len());
}
