use std::rc::Rc;

use crate::{
    motion::{Mapping, MappingError, Value},
    scroll::{ProgressSignal, Subscription},
};

/// Imperative write access to one element's inline style.
pub trait StyleSink {
    fn set_property(&self, name: &str, value: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    Color,
    BackgroundColor,
    Width,
}

impl Property {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::TranslateX | Self::TranslateY => "translate",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::Width => "width",
        }
    }

    pub fn css_value(self, value: &Value) -> String {
        match (self, value) {
            (Self::TranslateX, Value::Number(amount)) => format!("{} 0", Value::px(*amount)),
            (Self::TranslateX, other) => format!("{other} 0"),
            (Self::TranslateY, Value::Number(amount)) => format!("0 {}", Value::px(*amount)),
            (Self::TranslateY, other) => format!("0 {other}"),
            (Self::Rotate, Value::Number(amount)) => Value::deg(*amount).to_string(),
            (Self::Width, Value::Number(amount)) => Value::percent(*amount).to_string(),
            (_, other) => other.to_string(),
        }
    }
}

/// Ties one mapping to one style property of one element.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub property: Property,
    pub mapping: Rc<Mapping>,
}

impl Binding {
    pub fn new(property: Property, mapping: Mapping) -> Self {
        Self {
            property,
            mapping: Rc::new(mapping),
        }
    }

    pub fn apply(&self, progress: f64, sink: &dyn StyleSink) {
        let value = self.mapping.sample(progress);
        sink.set_property(self.property.css_name(), &self.property.css_value(&value));
    }
}

pub fn bind(signal: &ProgressSignal, binding: Binding, sink: impl StyleSink + 'static) -> Subscription {
    binding.apply(signal.get(), &sink);
    signal.subscribe(move |progress| binding.apply(progress, &sink))
}

/// Builds the mapping only now and binds it. A rejected mapping writes
/// nothing.
pub fn try_bind(
    signal: &ProgressSignal,
    property: Property,
    mapping: impl FnOnce() -> Result<Mapping, MappingError>,
    sink: impl StyleSink + 'static,
) -> Result<Subscription, MappingError> {
    let binding = Binding::new(property, mapping()?);
    Ok(bind(signal, binding, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Default)]
    struct RecordingSink {
        writes: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl StyleSink for RecordingSink {
        fn set_property(&self, name: &str, value: &str) {
            self.writes
                .borrow_mut()
                .push((name.to_string(), value.to_string()));
        }
    }

    impl RecordingSink {
        fn values(&self) -> Vec<String> {
            self.writes.borrow().iter().map(|(_, value)| value.clone()).collect()
        }
    }

    #[test]
    fn writes_initial_value_then_follows_the_signal() {
        let signal = ProgressSignal::new();
        let sink = RecordingSink::default();
        let binding = Binding::new(
            Property::Opacity,
            Mapping::new([(0.0, 1.0), (0.25, 0.0)]).unwrap(),
        );

        let _subscription = bind(&signal, binding, sink.clone());
        signal.publish(0.125);
        signal.publish(0.5);

        assert_eq!(sink.values(), vec!["1", "0.5", "0"]);
        assert!(sink.writes.borrow().iter().all(|(name, _)| name == "opacity"));
    }

    #[test]
    fn translate_and_rotate_values_carry_units() {
        let sink = RecordingSink::default();

        Binding::new(
            Property::TranslateY,
            Mapping::new([(0.0, "100%"), (0.25, "0%")]).unwrap(),
        )
        .apply(0.0, &sink);
        Binding::new(Property::TranslateY, Mapping::new([(0.0, 80.0), (1.0, -80.0)]).unwrap())
            .apply(1.0, &sink);
        Binding::new(Property::Rotate, Mapping::new([(0.0, 0.0), (1.0, 15.0)]).unwrap())
            .apply(1.0, &sink);

        assert_eq!(sink.values(), vec!["0 100%", "0 -80px", "15deg"]);
    }

    #[test]
    fn unmounted_binding_stops_writing() {
        let signal = ProgressSignal::new();
        let sink = RecordingSink::default();
        let binding = Binding::new(
            Property::Color,
            Mapping::new([(0.0, "#333333"), (1.0, "#ffffff")]).unwrap(),
        );

        let subscription = bind(&signal, binding, sink.clone());
        signal.publish(1.0);
        drop(subscription);
        signal.publish(0.5);

        assert_eq!(
            sink.values(),
            vec!["rgba(51, 51, 51, 1)", "rgba(255, 255, 255, 1)"]
        );
    }

    #[test]
    fn try_bind_builds_the_mapping_once() {
        let signal = ProgressSignal::new();
        let sink = RecordingSink::default();
        let builds = Rc::new(Cell::new(0));

        let counter = builds.clone();
        let subscription = try_bind(
            &signal,
            Property::Opacity,
            move || {
                counter.set(counter.get() + 1);
                Mapping::new([(0.0, 0.0), (1.0, 1.0)])
            },
            sink.clone(),
        );
        signal.publish(0.5);
        signal.publish(1.0);

        assert!(subscription.is_ok());
        assert_eq!(builds.get(), 1);
        assert_eq!(sink.values(), vec!["0", "0.5", "1"]);
    }

    #[test]
    fn rejected_mapping_is_never_bound() {
        let signal = ProgressSignal::new();
        let sink = RecordingSink::default();

        let outcome = try_bind(
            &signal,
            Property::TranslateY,
            || Mapping::new([(0.0, "inf"), (1.0, "0")]),
            sink.clone(),
        );
        signal.publish(0.5);

        assert!(outcome.is_err());
        assert!(sink.values().is_empty());
    }
}
