// src/gpu_backend.rs
use crate::config::WindowConfig;
use eframe::egui;

pub fn native_options(window: &WindowConfig) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Multibagger Lens")
            .with_maximized(window.maximized)
            .with_inner_size(egui::vec2(window.width, window.height))
            .with_min_inner_size(egui::vec2(640.0, 480.0)),
        multisampling: 4,
        depth_buffer: 0,
        stencil_buffer: 0,
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    }
}
