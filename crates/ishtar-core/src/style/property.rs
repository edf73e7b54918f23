/// Controls addressable in the style table.
///
/// `Default` (id 0) is the generic control: writing a base property on it
/// propagates the value to every other control's same slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Control {
    Default = 0,
    Label,
    Button,
    Toggle,
    CheckBox,
    ComboBox,
    DropdownBox,
    Slider,
    ProgressBar,
    StatusBar,
    ScrollBar,
    ListView,
    ColorPicker,
}

pub const CONTROL_COUNT: usize = 13;

/// Number of base (per-state color + layout) properties, ids `0..16`.
pub const BASE_PROP_COUNT: u16 = 16;

/// End of the reserved process-global extended range, ids `16..24`.
///
/// Reads and writes in this range ignore the control argument and resolve
/// to the `Default` row.
pub const GLOBAL_PROP_END: u16 = 24;

/// Slots allocated per control row. Ids `24..32` are control-family
/// extended properties.
pub const PROPS_PER_CONTROL: u16 = 32;

/// Base properties, individually overridable per control.
///
/// Writing one of these on [`Control::Default`] copies the value into every
/// control's row, so generic writes must precede per-control overrides.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum BaseProp {
    BorderColorNormal = 0,
    BaseColorNormal,
    TextColorNormal,
    BorderColorFocused,
    BaseColorFocused,
    TextColorFocused,
    BorderColorPressed,
    BaseColorPressed,
    TextColorPressed,
    BorderColorDisabled,
    BaseColorDisabled,
    TextColorDisabled,
    BorderWidth,
    TextPadding,
    TextAlignment,
}

/// Process-global extended properties (stored on the `Default` row; the
/// control argument is ignored for these ids).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum GlobalProp {
    TextSize = 16,
    TextSpacing,
    TextLineSpacing,
    TextAlignmentVertical,
    TextWrapMode,
    LineColor,
    BackgroundColor,
}

// ── control-family extended properties (ids 24..32) ───────────────────────

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum SliderProp {
    /// Thumb width in pixels; the bar variant ignores it.
    SliderWidth = 24,
    SliderPadding,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum ProgressBarProp {
    ProgressPadding = 24,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum CheckBoxProp {
    CheckPadding = 24,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum ComboBoxProp {
    ButtonWidth = 24,
    ButtonSpacing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum DropdownBoxProp {
    ArrowPadding = 24,
    ItemsSpacing,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum ListViewProp {
    ItemsHeight = 24,
    ItemsSpacing,
    ScrollBarWidth,
    /// 0 = left edge, 1 = right edge.
    ScrollBarSide,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum ColorPickerProp {
    SelectorSize = 24,
    HueBarWidth,
    HueBarPadding,
    HueBarSelectorHeight,
    HueBarSelectorOverflow,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum ScrollBarProp {
    SliderPadding = 24,
    /// Floor for the thumb length so it stays grabbable.
    SliderMinLength,
    ScrollPadding,
    /// Pixels scrolled per wheel unit.
    ScrollSpeed,
}

macro_rules! prop_id {
    ($($ty:ty),+ $(,)?) => {
        $(impl From<$ty> for u16 {
            #[inline]
            fn from(p: $ty) -> u16 {
                p as u16
            }
        })+
    };
}

prop_id!(
    BaseProp,
    GlobalProp,
    SliderProp,
    ProgressBarProp,
    CheckBoxProp,
    ComboBoxProp,
    DropdownBoxProp,
    ListViewProp,
    ColorPickerProp,
    ScrollBarProp,
);

impl Control {
    pub const ALL: [Control; CONTROL_COUNT] = [
        Control::Default,
        Control::Label,
        Control::Button,
        Control::Toggle,
        Control::CheckBox,
        Control::ComboBox,
        Control::DropdownBox,
        Control::Slider,
        Control::ProgressBar,
        Control::StatusBar,
        Control::ScrollBar,
        Control::ListView,
        Control::ColorPicker,
    ];
}
