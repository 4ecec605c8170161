use crossterm::event::{KeyCode, KeyModifiers};
use lulu::config::Config;
use lulu::keymap::{Action, KeyBinding, Keymap, KeymapPreset};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'x' quits instead of 'q', 'w' moves up instead of 'k'
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    let keymap = &loaded.keymap;
    assert_eq!(
        keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );

    // Overriding an action removes every preset key for it, ctrl+c included
    assert_eq!(keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
    assert_eq!(
        keymap.get_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
        None
    );
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    assert_eq!(keymap.get_action(KeyCode::Up, KeyModifiers::NONE), None);

    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_keymap_override_shadows_preset() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // 'j' now moves up
    config
        .keymap
        .overrides
        .push(KeyBinding::new("j", Action::MoveUp));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('k'), KeyModifiers::NONE),
        None
    );
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('h'), KeyModifiers::NONE),
        Some(Action::MoveLeft)
    );
}

#[test]
fn test_keymap_override_with_modifiers() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+n", Action::Quit));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_create(&config_path).unwrap();

    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('n'), KeyModifiers::CONTROL),
        Some(Action::Quit)
    );
    assert_ne!(
        loaded
            .keymap
            .get_action(KeyCode::Char('n'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
}

#[test]
fn test_keymap_override_serialization_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Emacs;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("f2", Action::Help));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("ctrl+q", Action::Quit));

    config.save(&config_path).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[keymap]"));
    assert!(content.contains("preset = \"emacs\""));
    assert!(content.contains("overrides"));
    assert!(content.contains("action = \"help\""));
    assert!(content.contains("[simulation]"));

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.keymap.get_action(KeyCode::F(2), KeyModifiers::NONE),
        Some(Action::Help)
    );
    // F1 belonged to Help in the preset and is shadowed now
    assert_eq!(loaded.keymap.get_action(KeyCode::F(1), KeyModifiers::NONE), None);
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![
            KeyBinding::new("w", Action::MoveUp),
            KeyBinding::new("x", Action::Quit),
        ],
    };

    assert_eq!(keymap.get_key_display_for_action(Action::MoveUp), "W");
    assert_eq!(keymap.get_key_display_for_action(Action::Quit), "X");
    assert_eq!(keymap.get_key_display_for_action(Action::Confirm), "Enter");

    let footer = keymap.footer_navigation();
    assert!(footer.starts_with("W/J: Navigate"), "got: '{}'", footer);
    assert!(footer.ends_with("X: Quit"), "got: '{}'", footer);
}

#[cfg(unix)]
#[test]
fn test_saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");
    Config::default().save(&config_path).unwrap();

    let mode = std::fs::metadata(&config_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
