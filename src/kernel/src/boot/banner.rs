//! Boot banner and branding.

/// The RetroOS logo, drawn above the scroll region.
pub const LOGO: [&str; 7] = [
    "                    >=>                          >===>        >=>>=>",
    "                    >=>                        >=>    >=>   >=>    >=>",
    ">> >==>   >==>    >=>>==> >> >==>    >=>     >=>        >=>  >=>",
    " >=>    >>   >=>    >=>    >=>     >=>  >=>  >=>        >=>    >=>",
    " >=>    >>===>>=>   >=>    >=>    >=>    >=> >=>        >=>       >=>",
    " >=>    >>          >=>    >=>     >=>  >=>    >=>     >=>  >=>    >=>",
    ">==>     >====>      >=>  >==>       >=>         >===>        >=>>=>",
];

/// Rows the banner occupies; the console scrolls below them.
pub const HEIGHT: usize = LOGO.len();
