pub(crate) mod modes;
pub(crate) mod palette;
pub(crate) mod params;
