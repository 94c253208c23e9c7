pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{request_builder::*, vote_builder::*};

pub mod request_builder {

    use super::*;
    use crate::{
        category::*, geo::MapPoint, id::Id, request::Request, time::Timestamp, urgency::Urgency,
    };

    #[derive(Debug)]
    pub struct RequestBuild {
        request: Request,
    }

    impl RequestBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.request.id = id.into();
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.request.created_by = user_id.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.request.pos = pos;
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.request.category = category;
            self.request.subcategory = category.default_subcategory().into();
            self
        }
        pub fn subcategory(mut self, subcategory: &str) -> Self {
            self.request.subcategory = subcategory.into();
            self
        }
        pub fn urgency(mut self, urgency: Urgency) -> Self {
            self.request.urgency = urgency;
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.request.notes = notes.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.request.created_at = created_at;
            self
        }
        pub fn finish(self) -> Request {
            self.request
        }
    }

    impl Builder for Request {
        type Build = RequestBuild;
        fn build() -> RequestBuild {
            RequestBuild {
                request: Request {
                    id: Id::new(),
                    created_by: Id::new(),
                    pos: MapPoint::default(),
                    category: Category::Other,
                    subcategory: Category::Other.default_subcategory().into(),
                    urgency: Urgency::default(),
                    notes: "notes".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod vote_builder {

    use super::*;
    use crate::{
        id::Id,
        vote::{Vote, VoteType},
    };

    #[derive(Debug)]
    pub struct VoteBuild {
        vote: Vote,
    }

    impl VoteBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.vote.id = id.into();
            self
        }
        pub fn request_id(mut self, request_id: &str) -> Self {
            self.vote.request_id = request_id.into();
            self
        }
        pub fn user_id(mut self, user_id: &str) -> Self {
            self.vote.user_id = user_id.into();
            self
        }
        pub fn vote_type(mut self, vote_type: VoteType) -> Self {
            self.vote.vote_type = vote_type;
            self
        }
        pub fn finish(self) -> Vote {
            self.vote
        }
    }

    impl Builder for Vote {
        type Build = VoteBuild;
        fn build() -> VoteBuild {
            VoteBuild {
                vote: Vote {
                    id: Id::new(),
                    request_id: Id::new(),
                    user_id: Id::new(),
                    vote_type: VoteType::Up,
                },
            }
        }
    }
}
