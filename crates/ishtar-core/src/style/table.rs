use std::cell::Cell;

use super::property::{
    BaseProp, CheckBoxProp, ColorPickerProp, ComboBoxProp, Control, DropdownBoxProp, GlobalProp,
    ListViewProp, ProgressBarProp, ScrollBarProp, SliderProp, BASE_PROP_COUNT, CONTROL_COUNT,
    GLOBAL_PROP_END, PROPS_PER_CONTROL,
};

/// Per-(control, property) style store.
///
/// Construction loads the compiled-in default skin, so a fresh table is
/// immediately usable — there is no lazy first-use initialization and no
/// hidden global instance; the owning context threads the table through
/// every control call.
///
/// Propagation rule: `set(Control::Default, p, v)` for a base `p` writes
/// the `Default` slot *and* copies `v` into every other control's same
/// slot. Per-control overrides therefore only survive when applied after
/// the generic write.
#[derive(Debug, Clone)]
pub struct StyleTable {
    slots: [[u32; PROPS_PER_CONTROL as usize]; CONTROL_COUNT],
    /// An out-of-range property id is reported once per table, then ignored.
    warned_invalid: Cell<bool>,
}

impl StyleTable {
    pub fn new() -> Self {
        let mut table = Self {
            slots: [[0; PROPS_PER_CONTROL as usize]; CONTROL_COUNT],
            warned_invalid: Cell::new(false),
        };
        table.load_defaults();
        table
    }

    /// Reads one style slot. Global extended properties resolve to the
    /// `Default` row regardless of `control`. Out-of-range ids read as 0.
    pub fn get(&self, control: Control, prop: impl Into<u16>) -> u32 {
        let prop = prop.into();
        if !self.check_prop(prop) {
            return 0;
        }
        let row = self.row_for(control, prop);
        self.slots[row][prop as usize]
    }

    /// Writes one style slot, applying the `Default`-row propagation rule
    /// for base properties. Out-of-range ids are ignored.
    pub fn set(&mut self, control: Control, prop: impl Into<u16>, value: u32) {
        let prop = prop.into();
        if !self.check_prop(prop) {
            return;
        }
        let row = self.row_for(control, prop);
        self.slots[row][prop as usize] = value;

        // Generic base write: fan the value out to every control row.
        if control == Control::Default && prop < BASE_PROP_COUNT {
            for row in &mut self.slots {
                row[prop as usize] = value;
            }
        }
    }

    /// Convenience for metric slots consumed as pixel sizes.
    #[inline]
    pub fn get_px(&self, control: Control, prop: impl Into<u16>) -> f32 {
        self.get(control, prop) as f32
    }

    fn row_for(&self, control: Control, prop: u16) -> usize {
        if (BASE_PROP_COUNT..GLOBAL_PROP_END).contains(&prop) {
            Control::Default as usize
        } else {
            control as usize
        }
    }

    fn check_prop(&self, prop: u16) -> bool {
        if prop < PROPS_PER_CONTROL {
            return true;
        }
        if !self.warned_invalid.get() {
            self.warned_invalid.set(true);
            log::warn!("style property id {prop} out of range, ignoring (reported once)");
        }
        false
    }

    /// Compiled-in light skin.
    ///
    /// Generic base properties first (they propagate), then per-control
    /// overrides, then global and family extended metrics.
    fn load_defaults(&mut self) {
        use Control::*;

        // Generic state colors.
        self.set(Default, BaseProp::BorderColorNormal, 0x8383_83ff);
        self.set(Default, BaseProp::BaseColorNormal, 0xc9c9_c9ff);
        self.set(Default, BaseProp::TextColorNormal, 0x6868_68ff);
        self.set(Default, BaseProp::BorderColorFocused, 0x5bb2_d9ff);
        self.set(Default, BaseProp::BaseColorFocused, 0xc9ef_feff);
        self.set(Default, BaseProp::TextColorFocused, 0x6c9b_bcff);
        self.set(Default, BaseProp::BorderColorPressed, 0x0492_c7ff);
        self.set(Default, BaseProp::BaseColorPressed, 0x97e8_ffff);
        self.set(Default, BaseProp::TextColorPressed, 0x368b_afff);
        self.set(Default, BaseProp::BorderColorDisabled, 0xb5c1_c2ff);
        self.set(Default, BaseProp::BaseColorDisabled, 0xe6e9_e9ff);
        self.set(Default, BaseProp::TextColorDisabled, 0xaeb7_b8ff);
        self.set(Default, BaseProp::BorderWidth, 1);
        self.set(Default, BaseProp::TextPadding, 0);
        self.set(Default, BaseProp::TextAlignment, 1); // center

        // Per-control layout overrides (after the generic writes, so they stick).
        self.set(Label, BaseProp::TextAlignment, 0);
        self.set(StatusBar, BaseProp::TextAlignment, 0);
        self.set(StatusBar, BaseProp::TextPadding, 6);
        self.set(CheckBox, BaseProp::TextPadding, 4);
        self.set(Slider, BaseProp::TextPadding, 4);
        self.set(ProgressBar, BaseProp::TextPadding, 4);
        self.set(ScrollBar, BaseProp::BorderWidth, 0);

        // Globals (stored on the Default row, control-independent).
        self.set(Default, GlobalProp::TextSize, 10);
        self.set(Default, GlobalProp::TextSpacing, 1);
        self.set(Default, GlobalProp::TextLineSpacing, 5);
        self.set(Default, GlobalProp::TextAlignmentVertical, 1); // middle
        self.set(Default, GlobalProp::TextWrapMode, 0); // none
        self.set(Default, GlobalProp::LineColor, 0x90ab_b5ff);
        self.set(Default, GlobalProp::BackgroundColor, 0xf5f5_f5ff);

        // Family metrics.
        self.set(Slider, SliderProp::SliderWidth, 16);
        self.set(Slider, SliderProp::SliderPadding, 1);
        self.set(ProgressBar, ProgressBarProp::ProgressPadding, 1);
        self.set(CheckBox, CheckBoxProp::CheckPadding, 1);
        self.set(ComboBox, ComboBoxProp::ButtonWidth, 32);
        self.set(ComboBox, ComboBoxProp::ButtonSpacing, 2);
        self.set(DropdownBox, DropdownBoxProp::ArrowPadding, 16);
        self.set(DropdownBox, DropdownBoxProp::ItemsSpacing, 2);
        self.set(ListView, ListViewProp::ItemsHeight, 28);
        self.set(ListView, ListViewProp::ItemsSpacing, 2);
        self.set(ListView, ListViewProp::ScrollBarWidth, 12);
        self.set(ListView, ListViewProp::ScrollBarSide, 1);
        self.set(ColorPicker, ColorPickerProp::SelectorSize, 8);
        self.set(ColorPicker, ColorPickerProp::HueBarWidth, 20);
        self.set(ColorPicker, ColorPickerProp::HueBarPadding, 10);
        self.set(ColorPicker, ColorPickerProp::HueBarSelectorHeight, 6);
        self.set(ColorPicker, ColorPickerProp::HueBarSelectorOverflow, 2);
        self.set(ScrollBar, ScrollBarProp::SliderPadding, 1);
        self.set(ScrollBar, ScrollBarProp::SliderMinLength, 24);
        self.set(ScrollBar, ScrollBarProp::ScrollPadding, 0);
        self.set(ScrollBar, ScrollBarProp::ScrollSpeed, 12);
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
