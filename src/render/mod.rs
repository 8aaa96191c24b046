pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod gradient;
pub(crate) mod layer;
pub(crate) mod noise;
pub(crate) mod pipeline;
pub(crate) mod typography;
