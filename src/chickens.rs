//! Chicken generation and the ASCII rave frame table.

pub const CHICKEN_WORD: &str = "chicken";

pub const RAVE_FPS: u32 = 4;
pub const RAVE_INTERVAL_MS: u32 = 1000 / RAVE_FPS;
pub const RAVE_PREFIX_LEN: usize = 8;
pub const RAVE_INSTRUCTIONS: &str =
    "Loop through frames array every intervalMs for maximum chicken energy";

// "chicken chicken ... chicken", n tokens
pub fn generate_chickens(n: u32) -> String {
    vec![CHICKEN_WORD; n as usize].join(" ")
}

pub fn generate_chicken_array(n: u32) -> Vec<&'static str> {
    vec![CHICKEN_WORD; n as usize]
}

/// Every animation cel we have, in playback order.
pub fn all_frames() -> &'static [&'static str] {
    CHICKEN_FRAMES
}

/// The short loop used by the original rave mode.
pub fn rave_frames() -> &'static [&'static str] {
    &CHICKEN_FRAMES[..RAVE_PREFIX_LEN.min(CHICKEN_FRAMES.len())]
}

pub static CHICKEN_FRAMES: &[&str] = &[
    // standing, looking right
    r"       __//
      /.__>\
      \_._/
       | |
      _| |_
     /_   _\",
    // pecking
    r"       __//
      /.  >
      \_./
       |V|
      _| |_
     /_   _\",
    // wings out
    r"       __//
     >/.__>\<
      \_._/
       | |
      _| |_
     /_   _\",
    // looking left
    r"      \\__
      /<__./
       \_._/
        | |
       _| |_
      /_   _\",
    // excited
    r"    * __//* *
   * /.__>\ *
      \_._/
       | |
      _| |_
     /_   _\",
    // dance left
    r"       __//
      /.__>\
      \_._/
       | |
      _| |
     /_   \",
    // dance right
    r"       __//
      /.__>\
      \_._/
       | |
       | |_
      /   _\",
    // flapping
    r"    \  __// /
     >/.__>/<
      \_._/
       | |
      _| |_
     /_   _\",
    // jumping
    r"       __//
      /.__>\
      \_._/
       | |

     /_   _\",
    // mega chicken
    r"           ___//
          /.__>\
          \_.^_/
     __    /| |\    __
    /  \__/ | | \__/  \
   /        | |        \
  /        _| |_        \
 /________/_   _\________\",
    // small chickens strutting
    r"   _
 __(.)<
 \___)",
    r"  _
>(.)__
 (___/",
    r"    _
 __(.)>
 \___)",
    r"  _
<(.)__
 (___/",
    r"   _
 (.)__>
 (___/",
    r"   _
 >(.)__
  (___/",
    r"   _
 __(.)-
 \___)",
    r"   _
 (.)__
 (___)>",
    // chick faces
    r"   _
 ('<
 / )
  |\",
    r#"   _
 (>")
 / )
  |\"#,
    r#"   _
 ("<)
 / )
  |\"#,
    r#"   _
 (v")
 / )
  |\"#,
    r"   _
 (^^)
 / )
  |\",
    r"   _
 (^v)
 / )
  |\",
    r"   _
 (Ov)
 / )
  |\",
    r"   _
 (vO)
 / )
  |\",
    // walking chicken cycle
    r"       \\
       (o>
    \\_//)
     \_/_)
      _|_",
    r"         \\
         (o>
      \\_//)
       \_/_)
        _|_",
    r"           \\
           (o>
        \\_//)
         \_/_)
          _|_",
    r"         \\
         (o>
      \\_//)
       \_/_)
        _|_",
    r"       \\
       (o>
    \\_//)
     \_/_)
      _|_",
    r"     \\
     (o>
  \\_//)
   \_/_)
    _|_",
    r"   \\
   (o>
\\_//)
 \_/_)
  _|_",
    r"     \\
     (o>
  \\_//)
   \_/_)
    _|_",
    r"       \\
       (o>
    \\_//)
     \_/_)
      _|_",
    r"         \\
         (o>
      \\_//)
       \_/_)
        _|_",
];

pub const SCREAMING_CHICKEN: &str = r"
╔══════════════════════════════════════════════════════════════════╗
║                                                                  ║
║                         ___//                                    ║
║                        /O__O\   BAWWWWWWWWK!!!                   ║
║                        \_^^_/                                    ║
║                   __    /| |\    __                              ║
║                  /  \__/ | | \__/  \                             ║
║                 /        | |        \                            ║
║                /        _| |_        \                           ║
║               /________/_   _\________\                          ║
║                                                                  ║
║              C H I C K E N   A C T I V A T E D                   ║
║                                                                  ║
╚══════════════════════════════════════════════════════════════════╝";
