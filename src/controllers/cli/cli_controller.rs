use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::controllers::data::atlas_request::AtlasRequest;
use crate::controllers::errors::RequestError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::compute_atlas::compute_atlas::compute_atlas;
use crate::core::actions::render_atlas::render_atlas::render_atlas;
use crate::core::colour_maps::jet::JetColourMap;
use crate::core::data::atlas::ResultAtlas;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Runs one request synchronously and hands the rendered image to a file
/// presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    atlas: Option<ResultAtlas>,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            atlas: None,
            buffer: None,
        }
    }

    pub fn generate(&mut self, request: &AtlasRequest) -> Result<(), RequestError> {
        let region = request.region;

        info!(
            real_bounds = ?(region.x_min(), region.x_max()),
            imag_bounds = ?(region.y_min(), region.y_max()),
            threshold = request.params.threshold(),
            density = request.density,
            limit = request.params.limit(),
            "generating atlas"
        );

        let start = Instant::now();
        let atlas = compute_atlas(region, request.density, request.params)?;
        let duration = start.elapsed();

        info!(?duration, "done generating");

        let colour_map = JetColourMap::new(atlas.max_count());
        self.buffer = Some(render_atlas(&atlas, &colour_map, request.show_grid)?);
        self.atlas = Some(atlas);

        Ok(())
    }

    #[must_use]
    pub fn atlas(&self) -> Option<&ResultAtlas> {
        self.atlas.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath)?
        }

        Ok(())
    }
}
