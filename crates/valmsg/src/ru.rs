//! Built-in Russian catalog.

use crate::catalog::{MagnitudeRule, RuleEntry, TemplateCatalog};
use crate::kind::KindFamily;
use crate::number::NumberFormat;
use crate::plural::{PluralForms, PluralRule};

/// Rules whose message substitutes the field label and the raw parameter.
///
/// `e164` keeps its English fragment as shipped.
const SCALAR_RULES: &[(&str, &str)] = &[
    ("required", "{0} обязательное поле"),
    ("eq", "{0} не равен {1}"),
    ("ne", "Поле {0} должно быть не равно {1}"),
    ("eqfield", "Поле {0} должно быть равно {1}"),
    ("eqcsfield", "Поле {0} должно быть равно {1}"),
    ("necsfield", "{0} не должен быть равно {1}"),
    ("gtcsfield", "Поле {0} должно быть больше {1}"),
    ("gtecsfield", "Поле {0} должно быть больше или равно {1}"),
    ("ltcsfield", "Поле {0} должно быть менее {1}"),
    ("ltecsfield", "Поле {0} должно быть менее или равно {1}"),
    ("nefield", "Поле {0} не должен быть равно {1}"),
    ("gtfield", "Поле {0} должно быть больше {1}"),
    ("gtefield", "Поле {0} должно быть больше или равно {1}"),
    ("ltfield", "Поле {0} должно быть менее {1}"),
    ("ltefield", "Поле {0} должно быть менее или равно {1}"),
    ("alpha", "Поле {0} должно содержать только буквы"),
    ("alphanum", "Поле {0} должно содержать только буквы и цифры"),
    ("numeric", "Поле {0} должно быть цифровым значением"),
    ("number", "Поле {0} должно быть цифрой"),
    ("hexadecimal", "Поле {0} должно быть шестнадцатеричной строкой"),
    ("hexcolor", "Поле {0} должно быть HEX цветом"),
    ("rgb", "Поле {0} должно быть RGB цветом"),
    ("rgba", "Поле {0} должно быть RGBA цветом"),
    ("hsl", "Поле {0} должно быть HSL цветом"),
    ("hsla", "Поле {0} должно быть HSLA цветом"),
    ("e164", "Поле {0} должно быть E.164 formatted phone number"),
    ("email", "Поле {0} должно быть email адресом"),
    ("url", "Поле {0} должно быть URL"),
    ("uri", "Поле {0} должно быть URI"),
    ("base64", "Поле {0} должно быть Base64 строкой"),
    ("contains", "Поле {0} должно содержать текст '{1}'"),
    ("containsany", "Поле {0} должно содержать минимум один из символов '{1}'"),
    ("excludes", "Поле {0} не должно содержать текст '{1}'"),
    ("excludesall", "Поле {0} не должно содержать символы '{1}'"),
    ("excludesrune", "Поле {0} не должно содержать '{1}'"),
    ("isbn", "Поле {0} должно быть ISBN номером"),
    ("isbn10", "Поле {0} должно быть ISBN-10 номером"),
    ("isbn13", "Поле {0} должно быть ISBN-13 номером"),
    ("uuid", "Поле {0} должно быть UUID"),
    ("uuid3", "Поле {0} должно быть UUID 3 версии"),
    ("uuid4", "Поле {0} должно быть UUID 4 версии"),
    ("uuid5", "Поле {0} должно быть UUID 5 версии"),
    ("ascii", "Поле {0} должно содержать только ascii символы"),
    ("printascii", "Поле {0} должно содержать только доступные для печати ascii символы"),
    ("multibyte", "Поле {0} должно содержать мультибайтные символы"),
    ("datauri", "Поле {0} должно содержать Data URI"),
    ("latitude", "Поле {0} должно содержать координаты широты"),
    ("longitude", "Поле {0} должно содержать координаты долготы"),
    ("ssn", "Поле {0} должно быть SSN номером"),
    ("ipv4", "Поле {0} должно быть IPv4 адресом"),
    ("ipv6", "Поле {0} должно быть IPv6 адресом"),
    ("ip", "Поле {0} должно быть IP адресом"),
    ("cidr", "Поле {0} должно содержать CIDR обозначения"),
    ("cidrv4", "Поле {0} должно содержать CIDR обозначения для IPv4 адреса"),
    ("cidrv6", "Поле {0} должно содержать CIDR обозначения для IPv6 адреса"),
    ("tcp_addr", "Поле {0} должно быть TCP адресом"),
    ("tcp4_addr", "Поле {0} должно быть IPv4 TCP адресом"),
    ("tcp6_addr", "Поле {0} должно быть IPv6 TCP адресом"),
    ("udp_addr", "Поле {0} должно быть UDP адресом"),
    ("udp4_addr", "Поле {0} должно быть IPv4 UDP адресом"),
    ("udp6_addr", "Поле {0} должно быть IPv6 UDP адресом"),
    ("ip_addr", "Поле {0} должно быть распознаваемым IP адресом"),
    ("ip4_addr", "Поле {0} должно быть распознаваемым IPv4 адресом"),
    ("ip6_addr", "Поле {0} должно быть распознаваемым IPv6 адресом"),
    ("unix_addr", "Поле {0} должно быть распознаваемым UNIX адресом"),
    ("mac", "Поле {0} должно содержать MAC адрес"),
    ("unique", "Поле {0} должно содержать уникальные значения"),
    ("iscolor", "Поле {0} должно быть цветом"),
    ("oneof", "Поле {0} должно быть одним из [{1}]"),
    ("dateInFuture", "Дата и время не могут быть в прошлом"),
    ("existedEventsParams", "Недопустимые параметры события"),
    ("fileAccessType", "Недопустимый тип доступа к файлу"),
    ("starRating", "Недопустимая оценка"),
    ("userExistsInLdap", "Пользователь не найден в LDAP"),
];

/// Magnitude rule sentences: `(rule, string, items, number, datetime)`.
const MAGNITUDE_RULES: &[(&str, &str, &str, &str, Option<&str>)] = &[
    (
        "len",
        "Поле {0} должно быть длиной в {1}",
        "Поле {0} должно содержать {1}",
        "Поле {0} должно быть равно {1}",
        None,
    ),
    (
        "min",
        "Поле {0} должно содержать минимум {1}",
        "Поле {0} должно содержать минимум {1}",
        "Поле {0} должно быть больше или равно {1}",
        None,
    ),
    (
        "max",
        "Поле {0} должно содержать максимум {1}",
        "Поле {0} должно содержать максимум {1}",
        "Поле {0} должно быть меньше или равно {1}",
        None,
    ),
    (
        "lt",
        "Поле {0} должно иметь менее {1}",
        "Поле {0} должно содержать менее {1}",
        "Поле {0} должно быть менее {1}",
        Some("{0} должно быть меньше текущей даты и времени"),
    ),
    (
        "lte",
        "Поле {0} должно содержать максимум {1}",
        "Поле {0} должно содержать максимум {1}",
        "Поле {0} должно быть менее или равно {1}",
        Some("{0} должно быть меньше или равно текущей дате и времени"),
    ),
    (
        "gt",
        "Поле {0} должно быть длиннее {1}",
        "Поле {0} должно содержать более {1}",
        "Поле {0} должно быть больше {1}",
        Some("{0} должна быть позже текущего момента"),
    ),
    (
        "gte",
        "Поле {0} должно содержать минимум {1}",
        "Поле {0} должно содержать минимум {1}",
        "Поле {0} должно быть больше или равно {1}",
        Some("{0} должна быть позже или равна текущему моменту"),
    ),
];

/// Display labels for raw field names.
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("Title", "Название"),
    ("Description", "Описание"),
    ("FileName", "Имя файла"),
    ("FileAccess", "Доступ файла"),
    ("StartAt", "Время начала"),
    ("EndAt", "Время окончания"),
    ("EventID", "ID события"),
    ("UserID", "ID пользователя"),
    ("Message", "Сообщение"),
    ("Page", "Страница"),
    ("Limit", "Лимит"),
    ("Source", "Источник"),
    ("ModeratorEmails", "Модераторы"),
    ("Params", "Параметры"),
    ("Device", "Устройство"),
    ("Os", "Операционная система"),
    ("Browser", "Браузер"),
    ("Status", "Статус"),
    ("Link", "Ссылка"),
    ("ScheduleID", "ID расписания"),
    ("City", "Город"),
    ("Rating", "Оценка"),
    ("Type", "Тип"),
    ("Login", "Логин"),
    ("Password", "Пароль"),
    ("ParticipantsEmails", "Спикеры"),
];

fn characters() -> PluralForms {
    PluralForms::new("{0} символ", "{0} символа", "{0} символов", "{0} символы")
}

fn items() -> PluralForms {
    PluralForms::new("{0} элемент", "{0} элемента", "{0} элементов", "{0} элементы")
}

impl TemplateCatalog {
    /// The built-in Russian catalog.
    #[must_use]
    pub fn russian() -> Self {
        let mut catalog = Self::new("ru");
        seed_russian(&mut catalog);
        catalog
    }
}

fn seed_russian(catalog: &mut TemplateCatalog) {
    catalog.set_plural_rule(PluralRule::Slavic);
    catalog.set_number_format(NumberFormat::RUSSIAN);

    for &(rule, template) in SCALAR_RULES {
        catalog.replace_rule(rule, RuleEntry::Scalar(template.to_owned()));
    }

    for &(rule, string, items_sentence, number, datetime) in MAGNITUDE_RULES {
        let mut templates = MagnitudeRule::new()
            .with_sentence(KindFamily::String, string)
            .with_sentence(KindFamily::Items, items_sentence)
            .with_sentence(KindFamily::Number, number)
            .with_units(KindFamily::String, characters())
            .with_units(KindFamily::Items, items());
        if let Some(datetime) = datetime {
            templates = templates
                .temporal()
                .with_sentence(KindFamily::Datetime, datetime);
        }
        catalog.replace_rule(rule, RuleEntry::Magnitude(templates));
    }

    for &(field, label) in FIELD_ALIASES {
        catalog.replace_field_alias(field, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RuleFamily;

    #[test]
    fn seed_tables_have_unique_keys() {
        let catalog = TemplateCatalog::russian();
        assert_eq!(
            catalog.rule_count(),
            SCALAR_RULES.len() + MAGNITUDE_RULES.len()
        );
        assert_eq!(catalog.field_alias_count(), FIELD_ALIASES.len());
    }

    #[test]
    fn russian_catalog_is_complete() {
        let report = TemplateCatalog::russian().coverage_report();
        assert_eq!(report.locale, "ru");
        assert!(report.missing.is_empty(), "missing: {:?}", report.missing);
    }

    #[test]
    fn rule_families() {
        let catalog = TemplateCatalog::russian();
        for rule in ["len", "min", "max", "lt", "lte", "gt", "gte"] {
            assert_eq!(catalog.rule_family(rule), Some(RuleFamily::Magnitude), "{rule}");
        }
        for rule in ["eq", "ne", "eqfield", "oneof", "contains", "required", "email"] {
            assert_eq!(catalog.rule_family(rule), Some(RuleFamily::Scalar), "{rule}");
        }
    }

    #[test]
    fn e164_wording_kept_verbatim() {
        let catalog = TemplateCatalog::russian();
        assert_eq!(
            catalog.scalar_template("e164").unwrap(),
            "Поле {0} должно быть E.164 formatted phone number"
        );
    }

    #[test]
    fn only_comparison_rules_accept_temporal() {
        let catalog = TemplateCatalog::russian();
        for rule in ["lt", "lte", "gt", "gte"] {
            assert!(catalog.sentence(rule, KindFamily::Datetime).is_ok(), "{rule}");
        }
        for rule in ["len", "min", "max"] {
            assert!(catalog.sentence(rule, KindFamily::Datetime).is_err(), "{rule}");
        }
    }
}
