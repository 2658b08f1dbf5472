/// Keyboard keys and their translation tables.
///
/// `Key` is the engine-facing name of a physical key. Numeric codes follow
/// the GLFW key table, so printable keys are 7-bit ASCII on a US layout.
/// The winit mapping is by physical position (`KeyCode`), which keeps WASD
/// bindings stable across layouts.

use winit::keyboard::KeyCode;

macro_rules! define_keys {
    ($( $variant:ident = $code:literal => $key_code:ident ),* $(,)?) => {
        /// A physical keyboard key
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $( $variant, )*
        }

        impl Key {
            /// Every key, in ascending code order
            pub const ALL: &'static [Key] = &[ $( Key::$variant, )* ];

            /// GLFW-compatible numeric code
            pub fn code(self) -> i32 {
                match self {
                    $( Key::$variant => $code, )*
                }
            }

            /// Key for a GLFW-compatible numeric code
            pub fn from_code(code: i32) -> Option<Key> {
                match code {
                    $( $code => Some(Key::$variant), )*
                    _ => None,
                }
            }

            /// winit physical key code at the same position
            pub fn to_key_code(self) -> KeyCode {
                match self {
                    $( Key::$variant => KeyCode::$key_code, )*
                }
            }

            /// Key for a winit physical key code, if the engine knows it
            pub fn from_key_code(key_code: KeyCode) -> Option<Key> {
                match key_code {
                    $( KeyCode::$key_code => Some(Key::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

define_keys! {
    // Printable keys
    Space = 32 => Space,
    Apostrophe = 39 => Quote,
    Comma = 44 => Comma,
    Minus = 45 => Minus,
    Period = 46 => Period,
    Slash = 47 => Slash,
    Num0 = 48 => Digit0,
    Num1 = 49 => Digit1,
    Num2 = 50 => Digit2,
    Num3 = 51 => Digit3,
    Num4 = 52 => Digit4,
    Num5 = 53 => Digit5,
    Num6 = 54 => Digit6,
    Num7 = 55 => Digit7,
    Num8 = 56 => Digit8,
    Num9 = 57 => Digit9,
    Semicolon = 59 => Semicolon,
    Equal = 61 => Equal,
    A = 65 => KeyA,
    B = 66 => KeyB,
    C = 67 => KeyC,
    D = 68 => KeyD,
    E = 69 => KeyE,
    F = 70 => KeyF,
    G = 71 => KeyG,
    H = 72 => KeyH,
    I = 73 => KeyI,
    J = 74 => KeyJ,
    K = 75 => KeyK,
    L = 76 => KeyL,
    M = 77 => KeyM,
    N = 78 => KeyN,
    O = 79 => KeyO,
    P = 80 => KeyP,
    Q = 81 => KeyQ,
    R = 82 => KeyR,
    S = 83 => KeyS,
    T = 84 => KeyT,
    U = 85 => KeyU,
    V = 86 => KeyV,
    W = 87 => KeyW,
    X = 88 => KeyX,
    Y = 89 => KeyY,
    Z = 90 => KeyZ,
    LeftBracket = 91 => BracketLeft,
    Backslash = 92 => Backslash,
    RightBracket = 93 => BracketRight,
    GraveAccent = 96 => Backquote,
    World1 = 161 => IntlBackslash,
    World2 = 162 => IntlRo,

    // Function keys
    Escape = 256 => Escape,
    Enter = 257 => Enter,
    Tab = 258 => Tab,
    Backspace = 259 => Backspace,
    Insert = 260 => Insert,
    Delete = 261 => Delete,
    Right = 262 => ArrowRight,
    Left = 263 => ArrowLeft,
    Down = 264 => ArrowDown,
    Up = 265 => ArrowUp,
    PageUp = 266 => PageUp,
    PageDown = 267 => PageDown,
    Home = 268 => Home,
    End = 269 => End,
    CapsLock = 280 => CapsLock,
    ScrollLock = 281 => ScrollLock,
    NumLock = 282 => NumLock,
    PrintScreen = 283 => PrintScreen,
    Pause = 284 => Pause,
    F1 = 290 => F1,
    F2 = 291 => F2,
    F3 = 292 => F3,
    F4 = 293 => F4,
    F5 = 294 => F5,
    F6 = 295 => F6,
    F7 = 296 => F7,
    F8 = 297 => F8,
    F9 = 298 => F9,
    F10 = 299 => F10,
    F11 = 300 => F11,
    F12 = 301 => F12,
    F13 = 302 => F13,
    F14 = 303 => F14,
    F15 = 304 => F15,
    F16 = 305 => F16,
    F17 = 306 => F17,
    F18 = 307 => F18,
    F19 = 308 => F19,
    F20 = 309 => F20,
    F21 = 310 => F21,
    F22 = 311 => F22,
    F23 = 312 => F23,
    F24 = 313 => F24,
    F25 = 314 => F25,

    // Keypad
    Kp0 = 320 => Numpad0,
    Kp1 = 321 => Numpad1,
    Kp2 = 322 => Numpad2,
    Kp3 = 323 => Numpad3,
    Kp4 = 324 => Numpad4,
    Kp5 = 325 => Numpad5,
    Kp6 = 326 => Numpad6,
    Kp7 = 327 => Numpad7,
    Kp8 = 328 => Numpad8,
    Kp9 = 329 => Numpad9,
    KpDecimal = 330 => NumpadDecimal,
    KpDivide = 331 => NumpadDivide,
    KpMultiply = 332 => NumpadMultiply,
    KpSubtract = 333 => NumpadSubtract,
    KpAdd = 334 => NumpadAdd,
    KpEnter = 335 => NumpadEnter,
    KpEqual = 336 => NumpadEqual,

    // Modifiers
    LeftShift = 340 => ShiftLeft,
    LeftControl = 341 => ControlLeft,
    LeftAlt = 342 => AltLeft,
    LeftSuper = 343 => SuperLeft,
    RightShift = 344 => ShiftRight,
    RightControl = 345 => ControlRight,
    RightAlt = 346 => AltRight,
    RightSuper = 347 => SuperRight,
    Menu = 348 => ContextMenu,
}

impl Key {
    /// True for the keys whose code is a printable ASCII character
    pub fn is_printable(self) -> bool {
        (32..=126).contains(&self.code())
    }
}

#[cfg(test)]
#[path = "key_tests.rs"]
mod tests;
