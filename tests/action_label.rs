//! End-to-end action-key resolution over the embedded bundles, covering the
//! subtype-locale pinning, ambient tracking and root-collapse behaviors.

use actionkey::{
    ActionKeyResolver, EditorAction, KeyDescriptor, Locale, ResolveError, Subtype, SubtypeStore,
    subtype::QWERTY,
};

const LABEL_ACTIONS: &[EditorAction] = &[
    EditorAction::Go,
    EditorAction::Send,
    EditorAction::Next,
    EditorAction::Done,
    EditorAction::Previous,
];

fn resolver(ambient: &str) -> ActionKeyResolver {
    ActionKeyResolver::with_embedded_texts(Locale::parse(ambient)).unwrap()
}

fn find(store: &SubtypeStore, tag: &str, layout: &str) -> Subtype {
    store
        .find_by_locale_and_layout(&Locale::parse(tag), layout)
        .unwrap()
        .clone()
}

fn expect_label(
    resolver: &ActionKeyResolver,
    subtype: &Subtype,
    is_no_language: bool,
    action: EditorAction,
    text: &str,
    locale: &Locale,
) {
    assert_eq!(
        resolver.resolve(action, subtype, is_no_language).unwrap(),
        KeyDescriptor::Label {
            text: text.to_string(),
            locale: locale.clone(),
        },
        "action {action:?} on subtype {} (ambient {})",
        subtype.locale(),
        resolver.tracker().current(),
    );
}

/// All five label actions in one locale, plus the icon slots.
fn expect_all_keys(
    resolver: &ActionKeyResolver,
    subtype: &Subtype,
    is_no_language: bool,
    labels: [&str; 5],
    locale: &Locale,
) {
    let enter = resolver
        .resolve(EditorAction::Unspecified, subtype, is_no_language)
        .unwrap();
    assert!(matches!(enter, KeyDescriptor::Icon(_)));
    assert_eq!(
        resolver
            .resolve(EditorAction::None, subtype, is_no_language)
            .unwrap(),
        enter
    );
    let search = resolver
        .resolve(EditorAction::Search, subtype, is_no_language)
        .unwrap();
    assert!(matches!(search, KeyDescriptor::Icon(_)));
    assert_ne!(search, enter);
    for (&action, text) in LABEL_ACTIONS.iter().zip(labels) {
        expect_label(resolver, subtype, is_no_language, action, text, locale);
    }
}

const ITALIAN_LABELS: [&str; 5] = ["Vai", "Invia", "Avanti", "Fine", "Indietro"];
const FRENCH_LABELS: [&str; 5] = ["Aller", "Envoyer", "Suivant", "OK", "Précédent"];
const ENGLISH_LABELS: [&str; 5] = ["Go", "Send", "Next", "Done", "Previous"];
const JAPANESE_LABELS: [&str; 5] = ["実行", "送信", "次へ", "完了", "前へ"];

#[test]
fn test_action_label_in_subtype_locale_regardless_of_ambient() {
    let resolver = resolver("en_US");
    let store = SubtypeStore::with_defaults();
    let italian = find(&store, "it", QWERTY);
    let it = Locale::parse("it");
    for ambient in ["en_US", "fr", "it", "ja"] {
        resolver.on_ambient_locale_changed(Locale::parse(ambient));
        expect_all_keys(&resolver, &italian, false, ITALIAN_LABELS, &it);
    }
}

#[test]
fn test_no_language_subtype_tracks_ambient_locale() {
    let resolver = resolver("en_US");
    let store = SubtypeStore::with_defaults();
    let no_language = find(&store, "zz", QWERTY);
    let sequence = [
        ("en_US", ENGLISH_LABELS),
        ("fr", FRENCH_LABELS),
        ("it", ITALIAN_LABELS),
        ("ja", JAPANESE_LABELS),
    ];
    for (ambient, labels) in sequence {
        let ambient = Locale::parse(ambient);
        resolver.on_ambient_locale_changed(ambient.clone());
        expect_all_keys(&resolver, &no_language, true, labels, &ambient);
    }
}

#[test]
fn test_enter_and_search_ignore_every_locale() {
    let resolver = resolver("en_US");
    let store = SubtypeStore::with_defaults();
    let mut icon_keys = Vec::new();
    for ambient in ["en_US", "ja"] {
        resolver.on_ambient_locale_changed(Locale::parse(ambient));
        for subtype in store.subtypes() {
            let is_no_language = store.is_no_language(subtype);
            for action in [
                EditorAction::Unspecified,
                EditorAction::None,
                EditorAction::Search,
            ] {
                let key = resolver.resolve(action, subtype, is_no_language).unwrap();
                assert!(matches!(key, KeyDescriptor::Icon(_)), "{action:?}");
                icon_keys.push((action.slot(), key));
            }
        }
    }
    // One icon per slot across every subtype/ambient combination.
    let (slot0, first) = icon_keys[0].clone();
    for (slot, key) in icon_keys {
        if slot == slot0 {
            assert_eq!(key, first);
        }
    }
}

#[test]
fn test_hinglish_labels_come_from_default_bundle() {
    let resolver = resolver("en_US");
    let store = SubtypeStore::with_defaults();
    let hinglish = find(&store, "hi_ZZ", QWERTY);
    let root = Locale::root();
    for ambient in ["hi_ZZ", "en_US", "fr", "it", "ja"] {
        resolver.on_ambient_locale_changed(Locale::parse(ambient));
        expect_all_keys(&resolver, &hinglish, false, ENGLISH_LABELS, &root);
    }
}

#[test]
fn test_serbian_latin_labels_come_from_default_bundle() {
    let resolver = resolver("en_US");
    let store = SubtypeStore::with_defaults();
    let serbian_latin = find(&store, "sr_ZZ", QWERTY);
    expect_all_keys(&resolver, &serbian_latin, false, ENGLISH_LABELS, &Locale::root());
}

#[test]
fn test_pinned_subtype_unaffected_by_ambient_transitions() {
    let resolver = resolver("en_US");
    let store = SubtypeStore::with_defaults();
    let french = find(&store, "fr", "azerty");
    let before = resolver.resolve(EditorAction::Go, &french, false).unwrap();
    resolver.on_ambient_locale_changed(Locale::parse("ja"));
    resolver.on_ambient_locale_changed(Locale::parse("it"));
    let after = resolver.resolve(EditorAction::Go, &french, false).unwrap();
    assert_eq!(before, after);
    assert_eq!(
        after,
        KeyDescriptor::Label {
            text: "Aller".to_string(),
            locale: Locale::parse("fr"),
        }
    );
}

#[test]
fn test_noop_ambient_transition_keeps_epoch_and_results() {
    let resolver = resolver("it");
    let store = SubtypeStore::with_defaults();
    let no_language = find(&store, "zz", QWERTY);
    let before = resolver
        .resolve(EditorAction::Send, &no_language, true)
        .unwrap();
    let epoch = resolver.tracker().epoch();
    assert!(!resolver.on_ambient_locale_changed(Locale::parse("it")));
    assert_eq!(resolver.tracker().epoch(), epoch);
    let after = resolver
        .resolve(EditorAction::Send, &no_language, true)
        .unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_unknown_action_code_is_an_error() {
    assert_eq!(
        EditorAction::from_code(42),
        Err(ResolveError::UnknownAction(42))
    );
}

#[test]
fn test_label_locale_is_exact_not_family_equivalent() {
    // A Hinglish descriptor reports root, never hi or hi_ZZ.
    let resolver = resolver("en_US");
    let store = SubtypeStore::with_defaults();
    let hinglish = find(&store, "hi_ZZ", QWERTY);
    let key = resolver.resolve(EditorAction::Go, &hinglish, false).unwrap();
    match key {
        KeyDescriptor::Label { locale, .. } => {
            assert!(locale.is_root());
            assert_ne!(locale, Locale::parse("hi"));
            assert_ne!(locale, Locale::parse("hi_ZZ"));
        }
        KeyDescriptor::Icon(_) => panic!("expected a label key"),
    }
}
