use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::contact::application::domain::{Contact, ContactDraft};
use crate::modules::contact::application::ports::incoming::ContactUseCases;
use crate::modules::contact_form::application::domain::{
    ContactForm, ContactFormDraft, ContactFormFilter,
};
use crate::modules::contact_form::application::ports::incoming::ContactFormUseCases;
use crate::modules::education::application::domain::{Education, EducationDraft};
use crate::modules::education::application::ports::incoming::EducationUseCases;
use crate::modules::experience::application::domain::{
    Experience, ExperienceDraft, ExperienceFilter,
};
use crate::modules::experience::application::ports::incoming::ExperienceUseCases;
use crate::modules::hero::application::domain::{Hero, HeroDraft};
use crate::modules::hero::application::ports::incoming::HeroUseCases;
use crate::shared::errors::AppError;
use crate::shared::persistence::PageResult;
use crate::shared::validation::Pagination;

fn page_of<T>(item: Option<T>, page: Pagination) -> PageResult<T> {
    let items: Vec<T> = item.into_iter().collect();
    let total = items.len() as u64;
    PageResult::new(items, page, total)
}

// ============================================================
// Fixtures
// ============================================================

pub fn sample_hero() -> Hero {
    let now = Utc::now();
    Hero {
        id: Uuid::new_v4(),
        name: "Jane Doe".to_string(),
        title: "Backend Engineer".to_string(),
        bio: "Builds reliable APIs.".to_string(),
        years_experience: 7,
        cv_url: None,
        profile_image: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_experience(is_active: bool) -> Experience {
    let now = Utc::now();
    Experience {
        id: Uuid::new_v4(),
        title: "Senior Backend Engineer".to_string(),
        company: "Acme".to_string(),
        website: "https://acme.example.com".to_string(),
        duration: "2021 - Present".to_string(),
        location: "Remote".to_string(),
        description: "Payments platform.".to_string(),
        order: 0,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_education(is_active: bool) -> Education {
    let now = Utc::now();
    Education {
        id: Uuid::new_v4(),
        degree: "BSc Computer Science".to_string(),
        institution: "University of Somewhere".to_string(),
        duration: "2014 - 2018".to_string(),
        location: "Berlin".to_string(),
        description: None,
        order: 0,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

pub fn sample_contact() -> Contact {
    let now = Utc::now();
    Contact {
        id: Uuid::new_v4(),
        email: "jane@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        linkedin: "https://linkedin.com/in/janedoe".to_string(),
        github: "https://github.com/janedoe".to_string(),
        location: "Berlin, Germany".to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn sample_contact_form(id: Uuid) -> ContactForm {
    let now = Utc::now();
    ContactForm {
        id,
        name: "Sam Smith".to_string(),
        email: "sam@example.com".to_string(),
        phone: None,
        role: "Engineering Manager".to_string(),
        company: "Initech".to_string(),
        message: "Hello".to_string(),
        is_read: false,
        is_archived: false,
        created_at: now,
        updated_at: now,
    }
}

// ============================================================
// Hero
// ============================================================

#[derive(Clone, Default)]
pub struct StubHeroUseCases {
    hero: Option<Hero>,
    calls: Arc<AtomicUsize>,
}

impl StubHeroUseCases {
    pub fn with_hero(hero: Hero) -> Self {
        Self {
            hero: Some(hero),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) -> Result<Hero, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.hero.clone().ok_or_else(|| AppError::not_found("Hero"))
    }
}

#[async_trait]
impl HeroUseCases for StubHeroUseCases {
    async fn get_public(&self) -> Result<Hero, AppError> {
        self.hit()
    }

    async fn list(&self, page: Pagination) -> Result<PageResult<Hero>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(page_of(self.hero.clone(), page))
    }

    async fn create(&self, draft: HeroDraft) -> Result<Hero, AppError> {
        draft.validate()?;
        self.hit()
    }

    async fn replace(&self, _id: Uuid, draft: HeroDraft) -> Result<Hero, AppError> {
        draft.validate()?;
        self.hit()
    }

    async fn deactivate(&self, _id: Uuid) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================
// Experience
// ============================================================

#[derive(Clone, Default)]
pub struct StubExperienceUseCases {
    experience: Option<Experience>,
    calls: Arc<AtomicUsize>,
    last_filter: Arc<Mutex<Option<ExperienceFilter>>>,
}

impl StubExperienceUseCases {
    pub fn with_experience(experience: Experience) -> Self {
        Self {
            experience: Some(experience),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_filter(&self) -> Option<ExperienceFilter> {
        self.last_filter.lock().unwrap().clone()
    }

    fn find(&self, id: Uuid, active_only: bool) -> Result<Experience, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.experience
            .clone()
            .filter(|e| e.id == id && (e.is_active || !active_only))
            .ok_or_else(|| AppError::not_found("Experience"))
    }
}

#[async_trait]
impl ExperienceUseCases for StubExperienceUseCases {
    async fn list(
        &self,
        filter: ExperienceFilter,
        page: Pagination,
    ) -> Result<PageResult<Experience>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filter.lock().unwrap() = Some(filter);
        Ok(page_of(self.experience.clone(), page))
    }

    async fn get_by_id(&self, id: Uuid, active_only: bool) -> Result<Experience, AppError> {
        self.find(id, active_only)
    }

    async fn create(&self, draft: ExperienceDraft) -> Result<Experience, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        draft.validate()?;
        Ok(self
            .experience
            .clone()
            .unwrap_or_else(|| sample_experience(true)))
    }

    async fn replace(&self, id: Uuid, draft: ExperienceDraft) -> Result<Experience, AppError> {
        draft.validate()?;
        self.find(id, false)
    }

    async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        self.find(id, false).map(|_| ())
    }
}

// ============================================================
// Education
// ============================================================

#[derive(Clone, Default)]
pub struct StubEducationUseCases {
    education: Option<Education>,
}

impl StubEducationUseCases {
    pub fn with_education(education: Education) -> Self {
        Self {
            education: Some(education),
        }
    }

    fn find(&self, id: Uuid, active_only: bool) -> Result<Education, AppError> {
        self.education
            .clone()
            .filter(|e| e.id == id && (e.is_active || !active_only))
            .ok_or_else(|| AppError::not_found("Education"))
    }
}

#[async_trait]
impl EducationUseCases for StubEducationUseCases {
    async fn list(
        &self,
        active_only: bool,
        page: Pagination,
    ) -> Result<PageResult<Education>, AppError> {
        let visible = self
            .education
            .clone()
            .filter(|e| e.is_active || !active_only);
        Ok(page_of(visible, page))
    }

    async fn get_by_id(&self, id: Uuid, active_only: bool) -> Result<Education, AppError> {
        self.find(id, active_only)
    }

    async fn create(&self, draft: EducationDraft) -> Result<Education, AppError> {
        draft.validate()?;
        Ok(self
            .education
            .clone()
            .unwrap_or_else(|| sample_education(true)))
    }

    async fn replace(&self, id: Uuid, draft: EducationDraft) -> Result<Education, AppError> {
        draft.validate()?;
        self.find(id, false)
    }

    async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        self.find(id, false).map(|_| ())
    }
}

// ============================================================
// Contact
// ============================================================

#[derive(Clone, Default)]
pub struct StubContactUseCases {
    contact: Option<Contact>,
}

impl StubContactUseCases {
    pub fn with_contact(contact: Contact) -> Self {
        Self {
            contact: Some(contact),
        }
    }

    fn find(&self, id: Uuid) -> Result<Contact, AppError> {
        self.contact
            .clone()
            .filter(|c| c.id == id)
            .ok_or_else(|| AppError::not_found("Contact"))
    }
}

#[async_trait]
impl ContactUseCases for StubContactUseCases {
    async fn get_public(&self) -> Result<Contact, AppError> {
        self.contact
            .clone()
            .filter(|c| c.is_active)
            .ok_or_else(|| AppError::not_found("Contact"))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Contact, AppError> {
        self.find(id)
    }

    async fn list(&self, page: Pagination) -> Result<PageResult<Contact>, AppError> {
        Ok(page_of(self.contact.clone(), page))
    }

    async fn create(&self, draft: ContactDraft) -> Result<Contact, AppError> {
        let data = draft.validate()?;

        if let Some(existing) = &self.contact {
            if existing.email.eq_ignore_ascii_case(&data.email) {
                return Err(AppError::DuplicateKey("contacts_email_key".to_string()));
            }
        }

        Ok(sample_contact())
    }

    async fn replace(&self, id: Uuid, draft: ContactDraft) -> Result<Contact, AppError> {
        draft.validate()?;
        self.find(id)
    }

    async fn deactivate(&self, id: Uuid) -> Result<(), AppError> {
        self.find(id).map(|_| ())
    }
}

// ============================================================
// Contact form
// ============================================================

#[derive(Clone, Default)]
pub struct StubContactFormUseCases {
    submitted: Arc<Mutex<Vec<String>>>,
    last_filter: Arc<Mutex<Option<ContactFormFilter>>>,
}

impl StubContactFormUseCases {
    pub fn submitted_names(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn last_filter(&self) -> Option<ContactFormFilter> {
        *self.last_filter.lock().unwrap()
    }
}

#[async_trait]
impl ContactFormUseCases for StubContactFormUseCases {
    async fn submit(&self, draft: ContactFormDraft) -> Result<ContactForm, AppError> {
        let data = draft.validate()?;
        self.submitted.lock().unwrap().push(data.name.clone());

        Ok(ContactForm {
            name: data.name,
            email: data.email,
            phone: data.phone,
            role: data.role,
            company: data.company,
            message: data.message,
            ..sample_contact_form(Uuid::new_v4())
        })
    }

    async fn list(
        &self,
        filter: ContactFormFilter,
        page: Pagination,
    ) -> Result<PageResult<ContactForm>, AppError> {
        *self.last_filter.lock().unwrap() = Some(filter);
        Ok(page_of(None, page))
    }

    async fn get_by_id(&self, _id: Uuid) -> Result<ContactForm, AppError> {
        Err(AppError::not_found("Contact form"))
    }

    async fn mark_read(&self, id: Uuid, is_read: bool) -> Result<ContactForm, AppError> {
        Ok(ContactForm {
            is_read,
            ..sample_contact_form(id)
        })
    }

    async fn archive(&self, id: Uuid, is_archived: bool) -> Result<ContactForm, AppError> {
        Ok(ContactForm {
            is_archived,
            ..sample_contact_form(id)
        })
    }
}
