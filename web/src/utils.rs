use concentration_core::Label;

/// Directory the card images are served from, one `<label>.png` per label.
pub(crate) const ASSET_DIR: &str = "/memory-cards";

pub(crate) fn asset_path(label: Label) -> String {
    format!("{}/{}.png", ASSET_DIR, label.name())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}
