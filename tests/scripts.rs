use scenario_scripts::fields::{character_field, character_fields};
use scenario_scripts::prompt_inputs::{apply_inputs_to_world_info, get_custom_inputs, replace_ids};
use scenario_scripts::pronoun::{pronoun, pronoun_for, world_info_pronoun};
use scenario_scripts::world_info::{find_keys_in_text, find_world_info};
use scenario_scripts::*;
use std::cell::RefCell;
use strum::IntoEnumIterator;

fn lore() -> Vec<WorldInfoEntry> {
    vec![
        WorldInfoEntry::new("dragon, wyrm", "Dragons breathe fire. See castle."),
        WorldInfoEntry::new("castle", "The castle is old."),
        WorldInfoEntry::new("wizard,", "A wizard."),
    ]
}

#[test]
fn test_commands_parsed_one_per_line() {
    let registry = CommandRegistry::new(CommandConfig::default()).expect("Failed to build registry");

    let commands = registry.parse_commands("/Roll 2d6 \nI say hi :greet  Bob\nno command here");

    assert_eq!(
        commands,
        vec![
            ParsedCommand {
                name: "roll".to_string(),
                args: "2d6".to_string()
            },
            ParsedCommand {
                name: "greet".to_string(),
                args: "Bob".to_string()
            },
        ]
    );
}

#[test]
fn test_commands_must_start_the_line_without_inline() {
    let config = CommandConfig {
        allow_inline: false,
        ..Default::default()
    };
    let registry = CommandRegistry::new(config).expect("Failed to build registry");

    let commands = registry.parse_commands("I say hi /greet Bob\n/greet Alice");

    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].args, "Alice");
}

#[test]
fn test_command_symbols_are_taken_literally() {
    let config = CommandConfig {
        command_symbols: "^]".to_string(),
        ..Default::default()
    };
    let registry = CommandRegistry::new(config).expect("Failed to build registry");

    assert_eq!(registry.parse_commands("]look around")[0].name, "look");
    assert_eq!(registry.parse_commands("^look")[0].name, "look");
    assert!(registry.parse_commands("/look").is_empty());
}

#[test]
fn test_registered_commands_and_aliases_run() {
    let seen = RefCell::new(Vec::new());

    let report = {
        let mut registry =
            CommandRegistry::new(CommandConfig::default()).expect("Failed to build registry");
        registry
            .register("example", |args| {
                seen.borrow_mut().push(args.to_string());
                None
            })
            .alias("exam", "example");

        assert!(registry.contains("EXAM"));
        registry.process("/example one\n/exam two\n/unknown three")
    };

    assert_eq!(*seen.borrow(), vec!["one".to_string(), "two".to_string()]);
    assert_eq!(report.executed.len(), 2);
    assert_eq!(report.into_hook_output("original"), HookOutput::stop(""));
}

#[test]
fn test_command_replacement_text_reaches_the_hook_output() {
    let mut registry =
        CommandRegistry::new(CommandConfig::default()).expect("Failed to build registry");
    registry.register("shout", |args| Some(args.to_uppercase()));

    let output = registry.process("/shout hello there").into_hook_output("/shout hello there");
    assert_eq!(output, HookOutput::stop("HELLO THERE"));

    let untouched = registry.process("just walking").into_hook_output("just walking");
    assert_eq!(untouched, HookOutput::pass("just walking"));
}

#[test]
fn test_world_info_keys_trigger_case_insensitively() {
    let entries = lore();

    assert_eq!(find_keys_in_text("A WYRM appears", &entries), vec![0]);
    assert_eq!(find_keys_in_text("The wizard's castle", &entries), vec![1, 2]);
    // The trailing comma in "wizard," must not trigger on everything.
    assert!(find_keys_in_text("nothing here", &entries).is_empty());

    assert_eq!(
        find_world_info(&entries, "CASTLE").map(|info| info.entry.as_str()),
        Some("The castle is old.")
    );
    assert!(find_world_info(&entries, "goblin").is_none());
}

#[test]
fn test_context_chains_world_info_within_budget() {
    let builder = ContextBuilder::default();
    let text = "MEMORYYou see a dragon.";

    let output = builder.build_context(text, "Pinned.", 6, &lore());

    assert_eq!(
        output,
        HookOutput::pass(
            "Dragons breathe fire. See castle.\nThe castle is old.\nPinned.\nYou see a dragon."
        )
    );
}

#[test]
fn test_context_without_world_info_chaining() {
    let builder = ContextBuilder::new(ContextTuning {
        search_world_info: false,
        ..Default::default()
    });

    let output = builder.build_context("You see a dragon.", "", 0, &lore());

    assert_eq!(output.text, "Dragons breathe fire. See castle.\n\nYou see a dragon.");
}

#[test]
fn test_context_ignores_pinned_keys_when_disabled() {
    let builder = ContextBuilder::new(ContextTuning {
        search_pinned: false,
        ..Default::default()
    });

    let output = builder.build_context("Quiet road.", "The wizard waits.", 0, &lore());

    assert_eq!(output.text, "The wizard waits.\nQuiet road.");
}

#[test]
fn test_context_cuts_extra_info_to_its_budget() {
    let entries = vec![WorldInfoEntry::new("cat", "Cats purr.")];
    let game = "the cat sat on the mat today";

    let head_first = ContextBuilder::new(ContextTuning {
        extra_info_length: 8,
        max_context_length: 40,
        ..Default::default()
    });
    assert_eq!(
        head_first.build_context(game, "PIN", 0, &entries).text,
        "Cats pur\nthe cat sat on the mat today"
    );

    let pinned_first = ContextBuilder::new(ContextTuning {
        extra_info_length: 8,
        max_context_length: 40,
        pinned_priority: true,
        ..Default::default()
    });
    assert_eq!(
        pinned_first.build_context(game, "PIN", 0, &entries).text,
        "urr.\nPIN\nthe cat sat on the mat today"
    );
}

#[test]
fn test_context_cuts_game_info_from_the_start() {
    let entries = vec![WorldInfoEntry::new("cat", "Cats purr.")];
    let builder = ContextBuilder::new(ContextTuning {
        extra_info_length: 8,
        max_context_length: 20,
        ..Default::default()
    });

    let output = builder.build_context("the cat sat on the mat today", "PIN", 0, &entries);

    assert_eq!(output.text, "Cats pur\ne mat today");
    assert_eq!(output.text.chars().count(), 20);
    assert!(!output.stop);
}

#[test]
fn test_character_fields_extracted() {
    let entry = "NAME: Aria; APPEARANCE: long pointy ears, dark hair;\nMIND: curious; AGE: 20";

    let fields = character_fields(entry);

    assert_eq!(fields.len(), 3);
    assert_eq!(fields["NAME"], "Aria");
    assert_eq!(fields["APPEARANCE"], "long pointy ears, dark hair");
    assert_eq!(fields["MIND"], "curious");
    // The last field has no closing semicolon.
    assert_eq!(character_field(entry, "AGE"), None);
}

#[test]
fn test_pronoun_table() {
    assert_eq!(pronoun(PronounForm::Them, Gender::He), "him");
    assert_eq!(pronoun(PronounForm::Theirs, Gender::She), "hers");
    assert_eq!(pronoun(PronounForm::Their, Gender::It), "its");
    assert_eq!(pronoun(PronounForm::Theirself, Gender::They), "theirself");

    // Neutral gender maps every word to itself.
    for form in PronounForm::iter() {
        assert_eq!(pronoun(form, Gender::They), form.to_string());
    }

    assert_eq!(pronoun_for("them", "She"), Some("her"));
    assert_eq!(pronoun_for("xem", "she"), None);
    assert_eq!(pronoun_for("them", "xe"), None);
}

#[test]
fn test_pronoun_read_from_world_info() {
    assert_eq!(world_info_pronoun("NAME: Bo; PRONOUN: She ;"), Gender::She);
    assert_eq!(world_info_pronoun("PRONOUN: it;"), Gender::It);
    assert_eq!(world_info_pronoun("NAME: Bo;"), Gender::They);
    assert_eq!(world_info_pronoun("PRONOUN: xe;"), Gender::They);
    // Unclosed field.
    assert_eq!(world_info_pronoun("PRONOUN: he"), Gender::They);
}

fn patterns() -> Vec<InputPattern> {
    vec![
        InputPattern::new("Your name is ", ".", "#player_name"),
        InputPattern::new(
            "You absolutely detest ",
            ", because they're gross and icky.",
            "#gross_creature",
        ),
    ]
}

#[test]
fn test_custom_inputs_extracted() {
    let text = "Your name is  Mira . You absolutely detest rats, because they're gross and icky.";

    let inputs = get_custom_inputs(text, &patterns()).expect("Failed to extract inputs");

    assert_eq!(
        inputs,
        vec![
            CustomInput {
                id: "#player_name".to_string(),
                text: "Mira".to_string()
            },
            CustomInput {
                id: "#gross_creature".to_string(),
                text: "rats".to_string()
            },
        ]
    );
    assert!(get_custom_inputs("Nothing to see.", &patterns())
        .expect("Failed to extract inputs")
        .is_empty());
}

#[test]
fn test_ids_replaced_case_insensitively_and_literally() {
    let inputs = vec![CustomInput {
        id: "#gross_creature".to_string(),
        text: "$1 rats".to_string(),
    }];

    let text = replace_ids("Swarming with #gross_creature and #GROSS_CREATURE!", &inputs)
        .expect("Failed to replace ids");

    assert_eq!(text, "Swarming with $1 rats and $1 rats!");
}

#[test]
fn test_inputs_applied_to_world_info_keys_and_entries() {
    let mut entries = vec![WorldInfoEntry {
        keys: "#player_name, hero".to_string(),
        entry: "#player_name hates #gross_creature.".to_string(),
        hidden: true,
    }];
    let inputs = vec![
        CustomInput {
            id: "#player_name".to_string(),
            text: "Mira".to_string(),
        },
        CustomInput {
            id: "#gross_creature".to_string(),
            text: "rats".to_string(),
        },
    ];

    apply_inputs_to_world_info(&mut entries, &inputs).expect("Failed to apply inputs");

    assert_eq!(entries[0].keys, "Mira, hero");
    assert_eq!(entries[0].entry, "Mira hates rats.");
    assert!(entries[0].hidden);
}

#[test]
fn test_prompt_input_extractor_runs_once() {
    let extractor = PromptInputExtractor::new(patterns());
    let mut state = ScenarioState::new("inputs");
    let mut entries = vec![WorldInfoEntry::new(
        "#player_name",
        "The pit is swarming with #gross_creature!",
    )];
    let memory = "Your name is Mira.";
    let text = format!("{memory}You absolutely detest rats, because they're gross and icky.");

    let output = extractor
        .input_modifier(&mut state, &text, memory, memory.chars().count(), &mut entries)
        .expect("Failed to run input modifier");

    assert_eq!(output, HookOutput::pass(text.clone()));
    assert!(state.initialized);
    assert_eq!(entries[0].keys, "Mira");
    assert_eq!(entries[0].entry, "The pit is swarming with rats!");

    let mut fresh = vec![WorldInfoEntry::new("#player_name", "#gross_creature")];
    extractor
        .input_modifier(&mut state, &text, memory, 0, &mut fresh)
        .expect("Failed to run input modifier");
    assert_eq!(fresh[0].keys, "#player_name");
}

#[test]
fn test_manual_pages_through_entries() {
    let manual = InfoManual::new(
        vec!["Welcome.".to_string(), "Second page.".to_string()],
        ManualTuning::default(),
    );
    let mut state = ScenarioState::new("manual");

    assert_eq!(manual.input_modifier(&mut state, "start").text, "Welcome.\n");
    assert_eq!(state.message.as_deref(), Some(r#"Enter "next" to continue..."#));

    assert_eq!(manual.input_modifier(&mut state, "next").text, "Second page.\n");
    assert_eq!(state.message.as_deref(), Some("End of manual"));

    assert_eq!(manual.input_modifier(&mut state, "next").text, "next");
    assert_eq!(state.page_num, 2);
    assert_eq!(manual.context_modifier("anything"), HookOutput::stop("anything"));
}

#[test]
fn test_empty_manual_finishes_immediately() {
    let manual = InfoManual::new(Vec::new(), ManualTuning::default());
    let mut state = ScenarioState::new("manual");

    let output = manual.input_modifier(&mut state, "hello");

    assert_eq!(output.text, "hello");
    assert_eq!(state.message.as_deref(), Some("End of manual"));
}

#[test]
fn test_similar_character_generator_flow() {
    let generator = SimilarCharacterGenerator::default();
    let mut state = ScenarioState::new("similar");
    let mut entries: Vec<WorldInfoEntry> = (1..=5)
        .map(|n| WorldInfoEntry::new(format!("char{n}"), format!("Character {n}.")))
        .collect();

    // The prompt goes through untouched and generation waits.
    let prompt = generator.input_modifier(&mut state, "The prompt", &mut entries);
    assert_eq!(prompt, HookOutput::pass("The prompt"));
    assert_eq!(state.message, Some(generator.tuning.prepare_message.clone()));
    assert_eq!(
        generator.tuning.prepare_message,
        r##"Add up to 4 characters to this adventure's world info, then enter "#ready" to begin."##
    );
    assert!(generator.context_modifier(&state, "ctx", &entries).stop);

    // Later input is swallowed until the player is ready.
    assert_eq!(generator.input_modifier(&mut state, "hello", &mut entries).text, "");
    assert!(!state.do_progress);

    let ready = generator.input_modifier(&mut state, "OK #READY", &mut entries);
    assert_eq!(ready.text, "");
    assert!(state.do_progress);
    assert_eq!(state.message, Some(generator.tuning.working_message.clone()));
    assert!(entries.iter().all(|info| info.keys == generator.tuning.cleaned_key));

    let context_text = format!("{}Game so far.", generator.tuning.start_prompt);
    let context = generator.context_modifier(&state, &context_text, &entries);
    assert!(!context.stop);
    assert_eq!(
        context.text,
        "Character 1.\n\nCharacter 2.\n\nCharacter 3.\n\nCharacter 4.\n\nGame so far."
    );
}

#[test]
fn test_similar_character_context_keeps_other_first_lines() {
    let generator = SimilarCharacterGenerator::new(GeneratorTuning {
        max_characters: 1,
        ..Default::default()
    });
    let state = ScenarioState {
        do_progress: true,
        ..ScenarioState::new("similar")
    };
    let entries = vec![WorldInfoEntry::new("a", "Alpha."), WorldInfoEntry::new("b", "Beta.")];

    let context = generator.context_modifier(&state, "First line\nSecond line", &entries);

    assert_eq!(context.text, "Alpha.\n\nFirst line\nSecond line");
}

#[test]
fn test_hook_output_json() {
    let json = HookOutput::stop("done").to_json().expect("Failed to serialize");
    assert_eq!(json, r#"{"text":"done","stop":true}"#);
}
