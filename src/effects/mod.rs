pub(crate) mod composite;
pub(crate) mod dissolve;
pub(crate) mod effect;
pub(crate) mod pixelate;
pub(crate) mod slide;
pub(crate) mod tiles;
pub(crate) mod transitions;
pub(crate) mod wipe;
