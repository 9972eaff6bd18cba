pub mod style_learner;
