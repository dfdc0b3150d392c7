//! End-to-end playthrough of a small story, driven through the full
//! session loop with a scripted surface.

use skein_core::{Lexicon, LexiconDoc, Story, StoryDoc};
use skein_engine::{Game, RecordingSurface, REFUSAL};

fn lexicon() -> Lexicon {
    let doc: LexiconDoc = serde_json::from_str(
        r#"{
            "stop_words": ["a", "an", "the", "to", "up"],
            "synonyms": { "grab": "take", "ascend": "climb", "ignite": "light" }
        }"#,
    )
    .unwrap();
    Lexicon::from(doc)
}

fn story() -> Story {
    let doc: StoryDoc = serde_json::from_value(serde_json::json!({
        "title": "The Lighthouse Keeper",
        "first_scene": "shore",
        "first_action": "_arrive",
        "scenes": [
            {
                "key": "shore",
                "actions": [
                    {
                        "key": "_arrive",
                        "outcomes": [
                            {
                                "text": ["You drag yourself onto the shingle below the lighthouse."],
                                "reqs": { "not_has_visited": ["shore"] },
                                "mutators": { "player_arrive": ["shore"] }
                            },
                            { "text": ["The shingle again. The tower waits."] }
                        ]
                    },
                    {
                        "key": "take rope",
                        "outcomes": [
                            {
                                "text": ["You already carry the rope."],
                                "reqs": { "has_item": ["rope"] }
                            },
                            {
                                "text": ["You coil the sodden rope over your shoulder."],
                                "mutators": { "add_item": ["rope"] }
                            }
                        ]
                    },
                    {
                        "key": "climb stair",
                        "outcomes": [
                            {
                                "text": ["Roped to the rail, you start up."],
                                "reqs": { "has_item": ["rope"] },
                                "mutators": { "player_move_to": ["stair"] }
                            },
                            { "text": ["The first steps are sheer. Not without a rope."] }
                        ]
                    },
                    {
                        "key": "_no_match",
                        "outcomes": [ { "text": ["The gulls screech at that."] } ]
                    }
                ]
            },
            {
                "key": "stair",
                "actions": [
                    {
                        "key": "_arrive",
                        "outcomes": [
                            {
                                "text": ["The spiral stair groans under you."],
                                "mutators": { "player_arrive": ["stair"] }
                            }
                        ]
                    },
                    {
                        "key": "climb",
                        "outcomes": [
                            {
                                "text": ["You climb to the top."],
                                "mutators": { "player_move_to": ["lamp_room"] }
                            }
                        ]
                    },
                    {
                        "key": "go down",
                        "outcomes": [
                            {
                                "text": ["Back down to the shingle."],
                                "mutators": { "player_move_to": ["shore"] }
                            }
                        ]
                    }
                ]
            },
            {
                "key": "lamp_room",
                "actions": [
                    {
                        "key": "_arrive",
                        "outcomes": [
                            {
                                "text": ["The lamp room. The great lens sits dark."],
                                "mutators": { "player_arrive": ["lamp_room"] }
                            }
                        ]
                    },
                    {
                        "key": "light lamp",
                        "outcomes": [
                            {
                                "text": [
                                    "The wick catches. The beam sweeps the sea.",
                                    "Somewhere out there, a ship turns away from the rocks."
                                ],
                                "mutators": { "add_state": ["lamp_lit"], "game_end": [] }
                            }
                        ]
                    }
                ]
            }
        ]
    }))
    .unwrap();
    Story::build(doc, &lexicon()).unwrap()
}

#[test]
fn full_session_to_the_end() {
    let mut game = Game::new(story(), lexicon());
    let mut surface = RecordingSurface::scripted([
        "climb the stair", // gated: no rope yet
        "grab the rope",   // synonym for take
        "climb the stair",
        "climb up",
        "ignite the lamp",
    ]);

    game.run(&mut surface).unwrap();

    assert!(!game.in_progress());
    assert!(game.player().has_state("lamp_lit"));
    assert_eq!(game.player().current_scene, "lamp_room");
    assert!(game.player().has_visited("shore"));
    assert!(game.player().has_visited("stair"));
    assert!(game.player().has_visited("lamp_room"));

    // The gated outcome fired before the rope, the move after
    assert_eq!(
        surface.times_rendered("The first steps are sheer. Not without a rope."),
        1
    );
    assert_eq!(surface.times_rendered("Roped to the rail, you start up."), 1);

    // Each arrival ran exactly once per move
    assert_eq!(
        surface.times_rendered("You drag yourself onto the shingle below the lighthouse."),
        1
    );
    assert_eq!(surface.times_rendered("The spiral stair groans under you."), 1);
    assert_eq!(
        surface.times_rendered("The lamp room. The great lens sits dark."),
        1
    );

    // Both paragraphs of the finale rendered, refusal never shown
    assert_eq!(
        surface.times_rendered("Somewhere out there, a ship turns away from the rocks."),
        1
    );
    assert_eq!(surface.times_rendered(REFUSAL), 0);
}

#[test]
fn revisits_use_the_fallthrough_arrival() {
    let mut game = Game::new(story(), lexicon());
    let mut surface = RecordingSurface::scripted([
        "take rope",
        "climb stair",
        "go down", // second shore arrival: not_has_visited now fails
        "climb stair",
        "climb",
        "light lamp",
    ]);

    game.run(&mut surface).unwrap();

    assert!(!game.in_progress());
    assert_eq!(
        surface.times_rendered("You drag yourself onto the shingle below the lighthouse."),
        1
    );
    assert_eq!(
        surface.times_rendered("The shingle again. The tower waits."),
        1
    );
}

#[test]
fn nonsense_hits_the_scene_default() {
    let mut game = Game::new(story(), lexicon());
    let mut surface = RecordingSurface::new();
    game.start(&mut surface).unwrap();

    game.turn("sing a shanty", &mut surface).unwrap();
    assert_eq!(surface.times_rendered("The gulls screech at that."), 1);
    assert_eq!(surface.times_rendered(REFUSAL), 0);
}
