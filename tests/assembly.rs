use geneweb_gedcom::gedcom::assemble::{
    collect_referenced_families, display_name, family_pointer, individual_pointer, note_node,
    parse_pointer_index,
};
use geneweb_gedcom::gedcom::{DocumentAssembler, Node, Value};
use geneweb_gedcom::gwdb::{
    segment_note, Event, Family, GwdbError, MarriageType, Person, SegmentedNote, Sex,
};

fn person(index: u32, first: &str, parents: Option<u32>, families: &[u32]) -> Person {
    Person {
        index,
        first_name: first.to_string(),
        last_name: "Martin".to_string(),
        parents,
        families: families.to_vec(),
        ..Person::default()
    }
}

fn family(index: u32, father: u32, mother: u32, children: &[u32]) -> Family {
    Family {
        index,
        father: Some(father),
        mother: Some(mother),
        children: children.to_vec(),
        ..Family::default()
    }
}

fn pointers(node: &Node, tag: &str) -> Vec<String> {
    node.children_with(tag)
        .filter_map(|c| c.value_str().map(str::to_string))
        .collect()
}

#[test]
fn pointers_round_trip_their_index() {
    assert_eq!(individual_pointer(0), "I1");
    assert_eq!(family_pointer(0), "F0");
    assert_eq!(parse_pointer_index("F12", 'F').unwrap(), 12);
}

#[test]
fn malformed_pointers_are_rejected() {
    for pointer in ["F", "Fx1", "I3", "F-1", "F 2"] {
        match parse_pointer_index(pointer, 'F') {
            Err(GwdbError::InvalidPointer { pointer: p, prefix }) => {
                assert_eq!(p, pointer);
                assert_eq!(prefix, 'F');
            }
            other => panic!("expected InvalidPointer for {:?}, got {:?}", pointer, other),
        }
    }
}

#[test]
fn referenced_families_are_collected_once_in_first_reference_order() {
    let persons = vec![
        person(0, "Jean", None, &[2]),
        person(1, "Marie", None, &[2, 5]),
        person(2, "Paul", Some(2), &[]),
        person(3, "Luc", Some(5), &[1]),
    ];
    assert_eq!(collect_referenced_families(&persons), vec![2, 5, 1]);
}

#[test]
fn family_shared_by_parent_and_spouses_is_created_once() {
    let persons = vec![
        person(0, "Jean", None, &[0]),
        person(1, "Marie", None, &[0]),
        person(2, "Paul", Some(0), &[]),
    ];
    let families = vec![family(0, 0, 1, &[2])];

    let document = DocumentAssembler::from_parts(&persons, &[], &families, &[])
        .assemble(Node::new("HEAD"))
        .unwrap();

    assert_eq!(document.individuals().len(), 3);
    assert_eq!(document.families().len(), 1);

    let fam = document.family("F0").unwrap();
    assert_eq!(pointers(fam, "HUSB"), vec!["I1"]);
    assert_eq!(pointers(fam, "WIFE"), vec!["I2"]);
    assert_eq!(pointers(fam, "CHIL"), vec!["I3"]);
    assert_eq!(fam.children[0].tag, "MARR");
}

#[test]
fn every_person_becomes_an_individual() {
    let persons: Vec<Person> = (0..25).map(|i| person(i, "P", None, &[])).collect();
    let document = DocumentAssembler::from_parts(&persons, &[], &[], &[])
        .assemble(Node::new("HEAD"))
        .unwrap();

    assert_eq!(document.individuals().len(), 25);
    assert!(document.families().is_empty());
    assert!(document.individual("I25").is_some());
}

#[test]
fn individual_fields_are_ordered() {
    let mut p = person(0, "Jean", Some(3), &[4, 5]);
    p.sex = Some(Sex::Male);
    p.first_name_aliases = vec!["Jeannot".to_string()];
    p.qualifiers = vec!["le Vieux".to_string()];
    p.occupation = Some("Farmer".to_string());
    p.events = vec![
        Event {
            code: 0,
            ..Event::default()
        },
        Event {
            code: 50,
            ..Event::default()
        },
    ];
    let note = segment_note("line one<br>line two");

    let persons = vec![p];
    let notes = vec![Some(note)];
    let document = DocumentAssembler::from_parts(&persons, &notes, &[], &[])
        .assemble(Node::new("HEAD"))
        .unwrap();

    let indi = document.individual("I1").unwrap();
    let tags: Vec<&str> = indi.children.iter().map(|c| c.tag).collect();
    assert_eq!(
        tags,
        vec!["NAME", "SEX", "NICK", "OCCU", "FAMC", "FAMS", "FAMS", "BIRT", "NOTE"]
    );
    assert_eq!(indi.children[0].value_str(), Some("\"Jeannot\" Jean /Martin/"));
    assert_eq!(indi.children[1].value_str(), Some("M"));
    assert_eq!(pointers(indi, "FAMS"), vec!["F4", "F5"]);
}

#[test]
fn unknown_sex_is_omitted() {
    let mut p = person(0, "Camille", None, &[]);
    p.sex = Some(Sex::Unknown);
    let persons = vec![p];
    let document = DocumentAssembler::from_parts(&persons, &[], &[], &[])
        .assemble(Node::new("HEAD"))
        .unwrap();

    assert!(document.individual("I1").unwrap().child("SEX").is_none());
}

#[test]
fn not_married_family_has_members_but_no_marriage() {
    let persons = vec![person(0, "Jean", None, &[0]), person(1, "Marie", None, &[0])];
    let mut fam = family(0, 0, 1, &[]);
    fam.marriage_type = MarriageType::NotMarried;
    let families = vec![fam];

    let document = DocumentAssembler::from_parts(&persons, &[], &families, &[])
        .assemble(Node::new("HEAD"))
        .unwrap();

    let node = document.family("F0").unwrap();
    assert!(node.child("MARR").is_none());
    assert_eq!(pointers(node, "HUSB"), vec!["I1"]);
}

#[test]
fn unresolved_links_are_skipped() {
    let persons = vec![person(0, "Jean", None, &[0])];
    let families = vec![family(0, 0, 41, &[42])];

    let document = DocumentAssembler::from_parts(&persons, &[], &families, &[])
        .assemble(Node::new("HEAD"))
        .unwrap();

    let node = document.family("F0").unwrap();
    assert_eq!(pointers(node, "HUSB"), vec!["I1"]);
    assert!(node.child("WIFE").is_none());
    assert!(node.child("CHIL").is_none());
}

#[test]
fn family_without_record_stays_bare() {
    let persons = vec![person(0, "Jean", None, &[7])];
    let document = DocumentAssembler::from_parts(&persons, &[], &[], &[])
        .assemble(Node::new("HEAD"))
        .unwrap();

    let node = document.family("F7").unwrap();
    assert!(node.children.is_empty());
}

#[test]
fn family_note_follows_the_family_index() {
    let persons = vec![person(0, "Jean", None, &[1])];
    let families = vec![family(0, 9, 9, &[]), family(1, 0, 9, &[])];
    let family_notes: Vec<Option<SegmentedNote>> = vec![
        Some(segment_note("wrong family")),
        Some(segment_note("right family")),
    ];

    let document = DocumentAssembler::from_parts(&persons, &[], &families, &family_notes)
        .assemble(Node::new("HEAD"))
        .unwrap();

    let note = document.family("F1").unwrap().child("NOTE").unwrap();
    assert_eq!(note.value, Value::Text("right family".to_string()));
}

#[test]
fn note_chain_maps_to_cont_and_conc() {
    let text = format!("{}<br>end", "z".repeat(80));
    let node = note_node(&segment_note(&text)).unwrap();

    assert_eq!(node.tag, "NOTE");
    let tags: Vec<&str> = node.children.iter().map(|c| c.tag).collect();
    assert_eq!(tags, vec!["CONC", "CONT"]);
    assert_eq!(node.children[1].value_str(), Some("end"));
}

#[test]
fn empty_note_still_produces_a_note_line() {
    let node = note_node(&segment_note("")).unwrap();
    assert_eq!(node.value_str(), Some(""));
    assert!(node.children.is_empty());
    assert!(note_node(&Vec::new()).is_none());
}

#[test]
fn display_name_without_aliases() {
    assert_eq!(display_name(&person(0, "Anne", None, &[])), "Anne /Martin/");
}
