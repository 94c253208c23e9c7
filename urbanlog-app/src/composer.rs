use urbanlog_core::{
    entities::{Category, Id, MapPoint, Request, Urgency},
    usecases::{self, NewRequest, RequestUpdate},
    util::validate,
};

/// What submitting the composer produces: the payload for either the
/// create or the update flow.
#[derive(Debug, Clone)]
pub enum ComposerOutput {
    Create(NewRequest),
    Update(RequestUpdate),
}

#[derive(Debug, Clone)]
enum ComposerTarget {
    /// A new request at a fixed position picked on the map.
    New { pos: MapPoint },
    /// Editing an existing request; position and owner are immutable.
    Edit { id: Id },
}

/// Collects the fields of a request form.
///
/// The composer is the user-facing gate for the field invariants:
/// the subcategory always belongs to the selected category, and
/// `submit` refuses blank notes without touching the store, keeping
/// the form populated for another attempt.
#[derive(Debug, Clone)]
pub struct RequestComposer {
    target: ComposerTarget,
    category: Category,
    subcategory: String,
    urgency: Urgency,
    notes: String,
}

impl RequestComposer {
    /// Opens a blank form for a request at the given position.
    pub fn for_new_request(pos: MapPoint, category: Category) -> Self {
        Self {
            target: ComposerTarget::New { pos },
            category,
            subcategory: category.default_subcategory().to_owned(),
            urgency: Urgency::default(),
            notes: String::new(),
        }
    }

    /// Opens the form pre-filled with an existing request.
    pub fn for_editing(request: &Request) -> Self {
        Self {
            target: ComposerTarget::Edit {
                id: request.id.clone(),
            },
            category: request.category,
            subcategory: request.subcategory.clone(),
            urgency: request.urgency,
            notes: request.notes.clone(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Switching the category resets the subcategory to the first
    /// option of the new list.
    pub fn set_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        self.category = category;
        self.subcategory = category.default_subcategory().to_owned();
    }

    /// Rejects labels that do not belong to the current category.
    pub fn set_subcategory(&mut self, subcategory: &str) -> Result<(), usecases::Error> {
        if !self.category.contains_subcategory(subcategory) {
            return Err(usecases::Error::Subcategory);
        }
        self.subcategory = subcategory.to_owned();
        Ok(())
    }

    pub fn set_urgency(&mut self, urgency: Urgency) {
        self.urgency = urgency;
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_owned();
    }

    /// Validates the form and yields the payload for the matching flow.
    ///
    /// Fails synchronously on blank notes; the composer is unchanged
    /// and can be resubmitted after the user has filled them in.
    pub fn submit(&self, author: &Id) -> Result<ComposerOutput, usecases::Error> {
        let notes =
            validate::non_empty_notes(&self.notes).ok_or(usecases::Error::EmptyNotes)?;
        let output = match &self.target {
            ComposerTarget::New { pos } => ComposerOutput::Create(NewRequest {
                created_by: author.clone(),
                pos: *pos,
                category: self.category,
                subcategory: self.subcategory.clone(),
                urgency: self.urgency,
                notes,
            }),
            ComposerTarget::Edit { id } => ComposerOutput::Update(RequestUpdate {
                id: id.clone(),
                category: self.category,
                subcategory: self.subcategory.clone(),
                urgency: self.urgency,
                notes,
            }),
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use urbanlog_entities::builders::*;

    use super::*;

    fn new_composer() -> RequestComposer {
        RequestComposer::for_new_request(
            MapPoint::from_lat_lng_deg(45.50, -122.67),
            Category::Safety,
        )
    }

    #[test]
    fn category_change_resets_subcategory() {
        let mut composer = new_composer();
        composer.set_subcategory("Crosswalk needed").unwrap();
        composer.set_category(Category::Transit);
        assert_eq!(
            Category::Transit.default_subcategory(),
            composer.subcategory()
        );

        // Re-selecting the current category keeps the chosen entry.
        let mut composer = new_composer();
        composer.set_subcategory("Crosswalk needed").unwrap();
        composer.set_category(Category::Safety);
        assert_eq!("Crosswalk needed", composer.subcategory());
    }

    #[test]
    fn foreign_subcategory_is_rejected() {
        let mut composer = new_composer();
        assert!(matches!(
            composer.set_subcategory("Bus shelter"),
            Err(usecases::Error::Subcategory)
        ));
        assert_eq!(
            Category::Safety.default_subcategory(),
            composer.subcategory()
        );
    }

    #[test]
    fn submit_requires_notes() {
        let mut composer = new_composer();
        composer.set_notes("  \n ");
        let result = composer.submit(&"a".into());
        assert!(matches!(result, Err(usecases::Error::EmptyNotes)));
        // The form keeps its state for the next attempt.
        assert_eq!(Category::Safety, composer.category());

        composer.set_notes("No crosswalk for 3 blocks");
        let output = composer.submit(&"a".into()).unwrap();
        match output {
            ComposerOutput::Create(new_request) => {
                assert_eq!(Id::from("a"), new_request.created_by);
                assert_eq!("No crosswalk for 3 blocks", new_request.notes);
            }
            ComposerOutput::Update(_) => panic!("expected a create payload"),
        }
    }

    #[test]
    fn editing_yields_an_update_payload() {
        let request = Request::build()
            .id("r")
            .category(Category::Safety)
            .subcategory("Better lighting")
            .notes("Dark corner at night")
            .finish();
        let mut composer = RequestComposer::for_editing(&request);
        composer.set_urgency(Urgency::High);
        let output = composer.submit(&request.created_by).unwrap();
        match output {
            ComposerOutput::Update(update) => {
                assert_eq!(request.id, update.id);
                assert_eq!(Urgency::High, update.urgency);
                assert_eq!("Better lighting", update.subcategory);
            }
            ComposerOutput::Create(_) => panic!("expected an update payload"),
        }
    }
}
