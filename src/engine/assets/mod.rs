// Asset handle system
//
// The runtime consumes sprites as opaque path-derived handles; decoding
// and uploading image data is the host loader's job.

mod handle;

pub use handle::SpriteId;
