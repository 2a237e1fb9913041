use crate::controllers::background::events::AtlasEvent;

pub trait AtlasPresenterPort: Send + Sync {
    fn present(&self, event: AtlasEvent);
}
