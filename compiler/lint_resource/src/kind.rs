//! Resource types.
//!
//! [`ResourceKind`] covers the identifier namespace of generated `R`
//! classes (`R.string`, `R.layout`, ...) plus two marker kinds that only
//! come from annotations: [`ResourceKind::ColorInt`] for packed ARGB
//! integers and [`ResourceKind::Dimension`] for pixel sizes.

use std::fmt;

use bitflags::bitflags;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceKind {
    Anim,
    Animator,
    Array,
    Attr,
    Bool,
    Color,
    Dimen,
    Drawable,
    Font,
    Fraction,
    Id,
    Integer,
    Interpolator,
    Layout,
    Menu,
    Mipmap,
    Navigation,
    Plurals,
    Raw,
    String,
    Style,
    Styleable,
    Transition,
    Xml,
    /// An `int` holding a color value rather than a color resource.
    ColorInt,
    /// An `int` or `float` holding a dimension in pixels.
    Dimension,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 26] = [
        ResourceKind::Anim,
        ResourceKind::Animator,
        ResourceKind::Array,
        ResourceKind::Attr,
        ResourceKind::Bool,
        ResourceKind::Color,
        ResourceKind::Dimen,
        ResourceKind::Drawable,
        ResourceKind::Font,
        ResourceKind::Fraction,
        ResourceKind::Id,
        ResourceKind::Integer,
        ResourceKind::Interpolator,
        ResourceKind::Layout,
        ResourceKind::Menu,
        ResourceKind::Mipmap,
        ResourceKind::Navigation,
        ResourceKind::Plurals,
        ResourceKind::Raw,
        ResourceKind::String,
        ResourceKind::Style,
        ResourceKind::Styleable,
        ResourceKind::Transition,
        ResourceKind::Xml,
        ResourceKind::ColorInt,
        ResourceKind::Dimension,
    ];

    /// Name as it appears in `R.<name>` and in resource URLs.
    pub const fn name(self) -> &'static str {
        match self {
            ResourceKind::Anim => "anim",
            ResourceKind::Animator => "animator",
            ResourceKind::Array => "array",
            ResourceKind::Attr => "attr",
            ResourceKind::Bool => "bool",
            ResourceKind::Color => "color",
            ResourceKind::Dimen => "dimen",
            ResourceKind::Drawable => "drawable",
            ResourceKind::Font => "font",
            ResourceKind::Fraction => "fraction",
            ResourceKind::Id => "id",
            ResourceKind::Integer => "integer",
            ResourceKind::Interpolator => "interpolator",
            ResourceKind::Layout => "layout",
            ResourceKind::Menu => "menu",
            ResourceKind::Mipmap => "mipmap",
            ResourceKind::Navigation => "navigation",
            ResourceKind::Plurals => "plurals",
            ResourceKind::Raw => "raw",
            ResourceKind::String => "string",
            ResourceKind::Style => "style",
            ResourceKind::Styleable => "styleable",
            ResourceKind::Transition => "transition",
            ResourceKind::Xml => "xml",
            ResourceKind::ColorInt => "color-int",
            ResourceKind::Dimension => "dimension",
        }
    }

    /// Look up an identifier kind by its `R` class name. Markers never match.
    pub fn from_name(name: &str) -> Option<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| !kind.is_marker() && kind.name() == name)
    }

    /// Simple name of the `@<Kind>Res` annotation for this kind.
    pub const fn annotation(self) -> Option<&'static str> {
        Some(match self {
            ResourceKind::Anim => "AnimRes",
            ResourceKind::Animator => "AnimatorRes",
            ResourceKind::Array => "ArrayRes",
            ResourceKind::Attr => "AttrRes",
            ResourceKind::Bool => "BoolRes",
            ResourceKind::Color => "ColorRes",
            ResourceKind::Dimen => "DimenRes",
            ResourceKind::Drawable => "DrawableRes",
            ResourceKind::Font => "FontRes",
            ResourceKind::Fraction => "FractionRes",
            ResourceKind::Id => "IdRes",
            ResourceKind::Integer => "IntegerRes",
            ResourceKind::Interpolator => "InterpolatorRes",
            ResourceKind::Layout => "LayoutRes",
            ResourceKind::Menu => "MenuRes",
            ResourceKind::Mipmap => "MipmapRes",
            ResourceKind::Navigation => "NavigationRes",
            ResourceKind::Plurals => "PluralsRes",
            ResourceKind::Raw => "RawRes",
            ResourceKind::String => "StringRes",
            ResourceKind::Style => "StyleRes",
            ResourceKind::Styleable => "StyleableRes",
            ResourceKind::Transition => "TransitionRes",
            ResourceKind::Xml => "XmlRes",
            ResourceKind::ColorInt | ResourceKind::Dimension => return None,
        })
    }

    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, ResourceKind::ColorInt | ResourceKind::Dimension)
    }

    pub const fn flag(self) -> ResourceKinds {
        match self {
            ResourceKind::Anim => ResourceKinds::ANIM,
            ResourceKind::Animator => ResourceKinds::ANIMATOR,
            ResourceKind::Array => ResourceKinds::ARRAY,
            ResourceKind::Attr => ResourceKinds::ATTR,
            ResourceKind::Bool => ResourceKinds::BOOL,
            ResourceKind::Color => ResourceKinds::COLOR,
            ResourceKind::Dimen => ResourceKinds::DIMEN,
            ResourceKind::Drawable => ResourceKinds::DRAWABLE,
            ResourceKind::Font => ResourceKinds::FONT,
            ResourceKind::Fraction => ResourceKinds::FRACTION,
            ResourceKind::Id => ResourceKinds::ID,
            ResourceKind::Integer => ResourceKinds::INTEGER,
            ResourceKind::Interpolator => ResourceKinds::INTERPOLATOR,
            ResourceKind::Layout => ResourceKinds::LAYOUT,
            ResourceKind::Menu => ResourceKinds::MENU,
            ResourceKind::Mipmap => ResourceKinds::MIPMAP,
            ResourceKind::Navigation => ResourceKinds::NAVIGATION,
            ResourceKind::Plurals => ResourceKinds::PLURALS,
            ResourceKind::Raw => ResourceKinds::RAW,
            ResourceKind::String => ResourceKinds::STRING,
            ResourceKind::Style => ResourceKinds::STYLE,
            ResourceKind::Styleable => ResourceKinds::STYLEABLE,
            ResourceKind::Transition => ResourceKinds::TRANSITION,
            ResourceKind::Xml => ResourceKinds::XML,
            ResourceKind::ColorInt => ResourceKinds::COLOR_INT,
            ResourceKind::Dimension => ResourceKinds::DIMENSION,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of [`ResourceKind`]s, one bit per kind in declaration order.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct ResourceKinds: u32 {
        const ANIM = 1 << 0;
        const ANIMATOR = 1 << 1;
        const ARRAY = 1 << 2;
        const ATTR = 1 << 3;
        const BOOL = 1 << 4;
        const COLOR = 1 << 5;
        const DIMEN = 1 << 6;
        const DRAWABLE = 1 << 7;
        const FONT = 1 << 8;
        const FRACTION = 1 << 9;
        const ID = 1 << 10;
        const INTEGER = 1 << 11;
        const INTERPOLATOR = 1 << 12;
        const LAYOUT = 1 << 13;
        const MENU = 1 << 14;
        const MIPMAP = 1 << 15;
        const NAVIGATION = 1 << 16;
        const PLURALS = 1 << 17;
        const RAW = 1 << 18;
        const STRING = 1 << 19;
        const STYLE = 1 << 20;
        const STYLEABLE = 1 << 21;
        const TRANSITION = 1 << 22;
        const XML = 1 << 23;

        // Markers (annotation-only)
        const COLOR_INT = 1 << 24;
        const DIMENSION = 1 << 25;

        /// Every kind addressable through an `R` class (`@AnyRes`).
        const IDENTIFIERS = (1 << 24) - 1;
    }
}

impl ResourceKinds {
    /// The member kinds in declaration order.
    pub fn kinds(self) -> impl Iterator<Item = ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(kind.flag()))
    }
}

impl From<ResourceKind> for ResourceKinds {
    fn from(kind: ResourceKind) -> Self {
        kind.flag()
    }
}

impl FromIterator<ResourceKind> for ResourceKinds {
    fn from_iter<I: IntoIterator<Item = ResourceKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ResourceKinds::empty(), |set, kind| set | kind.flag())
    }
}
