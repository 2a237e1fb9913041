use crate::core::colour_maps::errors::ColourMapError;
use crate::core::data::colour::Colour;

pub trait ColourMap<T>: Send + Sync {
    fn map(&self, value: T) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}
