/// Map a modifier+digit key press to a panel slot.
///
/// Digits `1`..`9` map to slots 1..9 and `0` to slot 10. Without the
/// modifier held nothing matches, so plain typing never toggles panels.
#[inline]
pub fn slot_for_key(key: &str, modifier_held: bool) -> Option<u8> {
    if !modifier_held {
        return None;
    }
    match key {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        "4" => Some(4),
        "5" => Some(5),
        "6" => Some(6),
        "7" => Some(7),
        "8" => Some(8),
        "9" => Some(9),
        "0" => Some(10),
        _ => None,
    }
}

/// Same as [`slot_for_key`] but from a physical key code such as `Digit3`.
/// Alt+digit produces symbols on some layouts, so the code is the fallback.
#[inline]
pub fn slot_for_code(code: &str, modifier_held: bool) -> Option<u8> {
    code.strip_prefix("Digit")
        .and_then(|digit| slot_for_key(digit, modifier_held))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HudCommand {
    Toggle(u8),
    HideAll,
    ResetLayout,
}

/// Resolve a key press to a HUD command. `key` is the produced character,
/// `code` the physical key; the code wins for digits.
pub fn command_for_key(key: &str, code: &str, modifier_held: bool) -> Option<HudCommand> {
    if !modifier_held {
        return None;
    }
    if let Some(slot) = slot_for_code(code, true).or_else(|| slot_for_key(key, true)) {
        return Some(HudCommand::Toggle(slot));
    }
    match code {
        "Escape" => Some(HudCommand::HideAll),
        "Backspace" => Some(HudCommand::ResetLayout),
        _ => None,
    }
}
