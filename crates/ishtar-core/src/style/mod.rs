//! Per-control styling.
//!
//! Every visual attribute a control reads — colors per interaction state,
//! border width, paddings, metrics — is one `u32` slot in a
//! [`StyleTable`], addressed by `(Control, property id)`. Packed
//! `0xRRGGBBAA` colors and pixel metrics share the same slot type so a
//! whole skin is just a sequence of `set` calls.

mod property;
mod table;

pub use property::{
    BaseProp, CheckBoxProp, ColorPickerProp, ComboBoxProp, Control, DropdownBoxProp, GlobalProp,
    ListViewProp, ProgressBarProp, ScrollBarProp, SliderProp, BASE_PROP_COUNT, CONTROL_COUNT,
    GLOBAL_PROP_END, PROPS_PER_CONTROL,
};
pub use table::StyleTable;
