use crate::gpu::DEPTH_FORMAT;

/// Multisample count asked for when the caller has no preference.
pub const DEFAULT_MSAA_SAMPLES: u32 = 4;

/// Errors acquiring the GPU. Any of these is fatal for the windowed app.
#[derive(Debug, thiserror::Error)]
pub enum GpuInitError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats for this adapter")]
    IncompatibleSurface,
}

/// Surface, device and queue for one window.
pub struct GpuContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    backend: wgpu::Backend,
    sample_count: u32,
}

impl GpuContext {
    /// Acquire a GPU for `target`, typically an `Arc<winit::window::Window>`.
    ///
    /// `msaa_samples` is an upper bound; the highest count the adapter
    /// supports for both the surface and depth formats is used.
    pub fn new(
        target: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
        msaa_samples: u32,
    ) -> Result<Self, GpuInitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(target)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(GpuInitError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("glade_device"),
                // Lets adapter format features, such as 8x MSAA, be used.
                required_features: adapter.features()
                    & wgpu::Features::TEXTURE_ADAPTER_SPECIFIC_FORMAT_FEATURES,
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(GpuInitError::IncompatibleSurface)?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let color_flags = adapter.get_texture_format_features(surface_format).flags;
        let depth_flags = adapter.get_texture_format_features(DEPTH_FORMAT).flags;
        let sample_count = pick_sample_count(msaa_samples, |n| {
            color_flags.sample_count_supported(n) && depth_flags.sample_count_supported(n)
        });

        let backend = adapter.get_info().backend;
        tracing::info!(
            backend = backend.to_str(),
            ?surface_format,
            sample_count,
            "GPU initialized"
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            backend,
            sample_count,
        })
    }

    pub fn backend(&self) -> wgpu::Backend {
        self.backend
    }

    /// Multisample count for the scene pass.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Reconfigure the surface for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
    }

    /// Next frame to draw into. A lost or outdated surface is reconfigured
    /// and the frame skipped.
    pub fn acquire(&self) -> Option<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                None
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                None
            }
        }
    }
}

/// Highest power-of-two sample count not above `requested` that `supported`
/// accepts. Falls back to 1.
pub fn pick_sample_count(requested: u32, supported: impl Fn(u32) -> bool) -> u32 {
    [16, 8, 4, 2]
        .into_iter()
        .find(|&n| n <= requested && supported(n))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_gets_four_samples() {
        assert_eq!(pick_sample_count(DEFAULT_MSAA_SAMPLES, |n| n <= 8), 4);
    }

    #[test]
    fn falls_back_to_lower_supported_count() {
        assert_eq!(pick_sample_count(8, |n| n == 2 || n == 4), 4);
        assert_eq!(pick_sample_count(4, |n| n == 2), 2);
        assert_eq!(pick_sample_count(4, |_| false), 1);
    }

    #[test]
    fn non_power_of_two_requests_round_down() {
        assert_eq!(pick_sample_count(6, |_| true), 4);
        assert_eq!(pick_sample_count(1, |_| true), 1);
        assert_eq!(pick_sample_count(0, |_| true), 1);
    }
}
