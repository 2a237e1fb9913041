pub mod atlas_request;
