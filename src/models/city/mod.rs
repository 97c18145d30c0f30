//! Cities delivery is offered to.
//!
//! The built-in table holds the administrative centres of the Russian federal
//! subjects. Lookups are case-insensitive but otherwise exact: hyphens, spaces and
//! `ё` must match the stored spelling.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const REGIONAL_CENTRES: &[&str] = &[
    "Москва",
    "Санкт-Петербург",
    "Севастополь",
    "Абакан",
    "Анадырь",
    "Архангельск",
    "Астрахань",
    "Барнаул",
    "Белгород",
    "Биробиджан",
    "Благовещенск",
    "Брянск",
    "Великий Новгород",
    "Владивосток",
    "Владикавказ",
    "Владимир",
    "Волгоград",
    "Вологда",
    "Воронеж",
    "Горно-Алтайск",
    "Грозный",
    "Екатеринбург",
    "Иваново",
    "Ижевск",
    "Иркутск",
    "Йошкар-Ола",
    "Казань",
    "Калининград",
    "Калуга",
    "Кемерово",
    "Киров",
    "Кострома",
    "Краснодар",
    "Красноярск",
    "Курган",
    "Курск",
    "Кызыл",
    "Липецк",
    "Магадан",
    "Магас",
    "Майкоп",
    "Махачкала",
    "Мурманск",
    "Нальчик",
    "Нарьян-Мар",
    "Нижний Новгород",
    "Новосибирск",
    "Омск",
    "Орёл",
    "Оренбург",
    "Пенза",
    "Пермь",
    "Петрозаводск",
    "Петропавловск-Камчатский",
    "Псков",
    "Ростов-на-Дону",
    "Рязань",
    "Салехард",
    "Самара",
    "Саранск",
    "Саратов",
    "Симферополь",
    "Смоленск",
    "Ставрополь",
    "Сыктывкар",
    "Тамбов",
    "Тверь",
    "Томск",
    "Тула",
    "Тюмень",
    "Улан-Удэ",
    "Ульяновск",
    "Уфа",
    "Хабаровск",
    "Ханты-Мансийск",
    "Чебоксары",
    "Челябинск",
    "Черкесск",
    "Чита",
    "Элиста",
    "Южно-Сахалинск",
    "Якутск",
    "Ярославль",
];

static BUILT_IN: Lazy<KnownCities> = Lazy::new(|| KnownCities::from_names(REGIONAL_CENTRES));

/// Immutable set of city names, keyed by their lowercase form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownCities {
    names: HashSet<String>,
}

impl KnownCities {
    /// The built-in table, constructed on first use.
    pub fn built_in() -> &'static KnownCities {
        &BUILT_IN
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns a new set holding these cities plus `extra`.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = self.names.clone();
        names.extend(extra.into_iter().map(|name| name.as_ref().to_lowercase()));
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
