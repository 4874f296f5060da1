//! The feat bonus leaves a trace when it is applied.

use spell_core::testing::MockCaster;
use spell_core::{AbilityKey, CastingContext, SpellRecord, SpellResolver};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One recorded event: its level and stringified fields.
#[derive(Debug, Clone)]
struct Recorded {
    level: Level,
    fields: HashMap<String, String>,
}

/// Layer that keeps every event it sees.
#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    fn info_events(&self) -> Vec<Recorded> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.level == Level::INFO)
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct FieldText(HashMap<String, String>);

impl Visit for FieldText {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldText::default();
        event.record(&mut fields);
        self.events.lock().unwrap().push(Recorded {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

fn record_events(f: impl FnOnce()) -> Recorder {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);
    recorder
}

fn sorcerer() -> MockCaster {
    MockCaster::new(10)
        .with_ability_mod(AbilityKey::Charisma, 4)
        .with_casting_entry("bloodline", AbilityKey::Charisma)
        .with_feat("Dangerous Sorcery")
}

#[test]
fn test_feat_bonus_emits_one_event() {
    let caster = sorcerer();
    let spell = SpellRecord::new("Lightning Bolt", 2)
        .with_damage("4d12")
        .with_duration("")
        .with_location("bloodline");

    let recorder = record_events(|| {
        let resolver =
            SpellResolver::with_context(&spell, &caster, CastingContext::at_level(5));
        assert_eq!(resolver.damage_formula().unwrap(), "4d12 + 5");
    });

    let events = recorder.info_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields["spell"], "Lightning Bolt");
    assert_eq!(events[0].fields["bonus"], "5");
    assert_eq!(events[0].fields["feat"], "Dangerous Sorcery");
}

#[test]
fn test_no_event_without_bonus() {
    let caster = sorcerer();
    let spell = SpellRecord::new("Lightning Bolt", 2)
        .with_damage("4d12")
        .with_duration("1 minute")
        .with_location("bloodline");

    let recorder = record_events(|| {
        let resolver =
            SpellResolver::with_context(&spell, &caster, CastingContext::at_level(5));
        assert_eq!(resolver.damage_formula().unwrap(), "4d12");
    });

    assert!(recorder.info_events().is_empty());
}
