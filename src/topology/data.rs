// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinate literals for the library.
//!
//! `BOOKCASES` is listed in dense-index order: entry `i` is the location that
//! owns dense index `i`. A location listed twice owns two indices.

/// Floors as `(name, plane)`.
pub const FLOORS: &[(&str, u8)] = &[("Ground", 0), ("Middle", 1), ("Top", 2)];

/// Rooms as `(name, min_x, max_x, min_y, max_y, plane)`, bounds inclusive.
pub const ROOMS: &[(&str, i32, i32, i32, i32, u8)] = &[
    ("Northwest", 1607, 1626, 3814, 3831, 0),
    ("Northeast", 1639, 1658, 3814, 3831, 0),
    ("Southwest", 1607, 1626, 3784, 3801, 0),
    ("Northwest", 1607, 1624, 3816, 3831, 1),
    ("Northeast", 1641, 1658, 3816, 3831, 1),
    ("Center", 1625, 1640, 3800, 3815, 1),
    ("Southwest", 1607, 1624, 3784, 3799, 1),
    ("Northwest", 1607, 1624, 3816, 3831, 2),
    ("Northeast", 1641, 1658, 3816, 3831, 2),
    ("Center", 1625, 1640, 3800, 3815, 2),
    ("Southwest", 1607, 1624, 3784, 3799, 2),
];

/// Bookcase locations as `(x, y, plane)`, in dense-index order.
pub const BOOKCASES: &[(i32, i32, u8)] = &[
    (1626, 3795, 0),
    (1625, 3793, 0),
    (1623, 3793, 0),
    (1620, 3792, 0),
    (1624, 3792, 0),
    (1626, 3788, 0),
    (1626, 3787, 0),
    (1624, 3784, 0),
    (1623, 3784, 0),
    (1621, 3784, 0),
    (1615, 3785, 0),
    (1615, 3788, 0),
    (1615, 3790, 0),
    (1614, 3790, 0),
    (1614, 3788, 0),
    (1614, 3786, 0),
    (1612, 3784, 0),
    (1610, 3784, 0),
    (1609, 3784, 0),
    (1607, 3786, 0),
    (1607, 3789, 0),
    (1607, 3795, 0),
    (1607, 3796, 0),
    (1607, 3799, 0),
    (1610, 3801, 0),
    (1612, 3801, 0),
    (1618, 3801, 0),
    (1620, 3801, 0),
    (1620, 3814, 0),
    (1618, 3814, 0),
    (1617, 3814, 0),
    (1615, 3816, 0),
    (1615, 3817, 0),
    (1615, 3820, 0),
    (1614, 3820, 0),
    (1614, 3817, 0),
    (1614, 3816, 0),
    (1612, 3814, 0),
    (1610, 3814, 0),
    (1607, 3816, 0),
    (1607, 3817, 0),
    (1607, 3820, 0),
    (1607, 3826, 0),
    (1607, 3828, 0),
    (1609, 3831, 0),
    (1612, 3831, 0),
    (1614, 3831, 0),
    (1619, 3831, 0),
    (1621, 3831, 0),
    (1624, 3831, 0),
    (1626, 3829, 0),
    (1626, 3827, 0),
    (1624, 3823, 0),
    (1622, 3823, 0),
    (1620, 3823, 0),
    (1621, 3822, 0),
    (1624, 3822, 0),
    (1626, 3820, 0),
    (1639, 3821, 0),
    (1639, 3822, 0),
    (1639, 3827, 0),
    (1639, 3829, 0),
    (1642, 3831, 0),
    (1645, 3831, 0),
    (1646, 3829, 0),
    (1646, 3827, 0),
    (1646, 3826, 0),
    (1647, 3827, 0),
    (1647, 3829, 0),
    (1647, 3830, 0),
    (1652, 3831, 0),
    (1653, 3831, 0),
    (1656, 3831, 0),
    (1658, 3829, 0),
    (1658, 3826, 0),
    (1658, 3825, 0),
    (1658, 3820, 0),
    (1658, 3819, 0),
    (1658, 3816, 0),
    (1655, 3814, 0),
    (1654, 3814, 0),
    (1651, 3817, 0),
    (1651, 3819, 0),
    (1651, 3820, 0),
    (1650, 3821, 0),
    (1650, 3819, 0),
    (1650, 3816, 0),
    (1648, 3814, 0),
    (1646, 3814, 0),
    (1645, 3814, 0),
    (1607, 3820, 1),
    (1607, 3821, 1),
    (1609, 3822, 1),
    (1612, 3823, 1),
    (1611, 3823, 1),
    (1607, 3824, 1),
    (1607, 3825, 1),
    (1607, 3827, 1),
    (1611, 3831, 1),
    (1612, 3831, 1),
    (1613, 3831, 1),
    (1617, 3831, 1),
    (1618, 3831, 1),
    (1620, 3831, 1),
    (1624, 3831, 1),
    (1624, 3829, 1),
    (1624, 3825, 1),
    (1624, 3824, 1),
    (1624, 3819, 1),
    (1624, 3817, 1),
    (1623, 3816, 1),
    (1621, 3816, 1),
    (1617, 3816, 1),
    (1616, 3816, 1),
    (1611, 3816, 1),
    (1609, 3816, 1),
    (1620, 3820, 1),
    (1620, 3822, 1),
    (1620, 3824, 1),
    (1620, 3825, 1),
    (1620, 3827, 1),
    (1621, 3826, 1),
    (1621, 3822, 1),
    (1621, 3820, 1),
    (1607, 3788, 1),
    (1607, 3789, 1),
    (1609, 3790, 1),
    (1611, 3790, 1),
    (1613, 3790, 1),
    (1614, 3789, 1),
    (1615, 3788, 1),
    (1615, 3790, 1),
    (1614, 3791, 1),
    (1613, 3791, 1),
    (1610, 3791, 1),
    (1609, 3791, 1),
    (1608, 3791, 1),
    (1607, 3793, 1),
    (1607, 3794, 1),
    (1608, 3799, 1),
    (1610, 3799, 1),
    (1615, 3799, 1),
    (1616, 3799, 1),
    (1621, 3799, 1),
    (1623, 3799, 1),
    (1624, 3798, 1),
    (1624, 3796, 1),
    (1624, 3792, 1),
    (1624, 3791, 1),
    (1623, 3789, 1),
    (1621, 3789, 1),
    (1620, 3788, 1),
    (1621, 3788, 1),
    (1624, 3787, 1),
    (1624, 3786, 1),
    (1619, 3784, 1),
    (1618, 3784, 1),
    (1616, 3784, 1),
    (1612, 3784, 1),
    (1611, 3784, 1),
    (1625, 3801, 1),
    (1625, 3802, 1),
    (1625, 3803, 1),
    (1625, 3804, 1),
    (1625, 3806, 1),
    (1625, 3807, 1),
    (1625, 3808, 1),
    (1625, 3809, 1),
    (1625, 3811, 1),
    (1625, 3812, 1),
    (1625, 3813, 1),
    (1625, 3814, 1),
    (1626, 3815, 1),
    (1627, 3815, 1),
    (1631, 3815, 1),
    (1632, 3815, 1),
    (1633, 3815, 1),
    (1634, 3815, 1),
    (1638, 3815, 1),
    (1639, 3815, 1),
    (1640, 3814, 1),
    (1640, 3813, 1),
    (1640, 3803, 1),
    (1640, 3802, 1),
    (1640, 3801, 1),
    (1639, 3800, 1),
    (1638, 3800, 1),
    (1634, 3800, 1),
    (1633, 3800, 1),
    (1632, 3800, 1),
    (1631, 3800, 1),
    (1627, 3800, 1),
    (1626, 3800, 1),
    (1641, 3817, 1),
    (1641, 3818, 1),
    (1641, 3819, 1),
    (1641, 3824, 1),
    (1641, 3825, 1),
    (1641, 3829, 1),
    (1645, 3831, 1),
    (1646, 3831, 1),
    (1647, 3831, 1),
    (1648, 3831, 1),
    (1649, 3830, 1),
    (1649, 3828, 1),
    (1650, 3829, 1),
    (1652, 3831, 1),
    (1653, 3831, 1),
    (1658, 3827, 1),
    (1658, 3826, 1),
    (1658, 3823, 1),
    (1658, 3822, 1),
    (1658, 3821, 1),
    (1658, 3820, 1),
    (1656, 3816, 1),
    (1655, 3816, 1),
    (1651, 3816, 1),
    (1649, 3816, 1),
    (1648, 3816, 1),
    (1644, 3816, 1),
    (1643, 3816, 1),
    (1607, 3785, 2),
    (1607, 3786, 2),
    (1607, 3796, 2),
    (1607, 3797, 2),
    (1608, 3799, 2),
    (1610, 3799, 2),
    (1611, 3799, 2),
    (1618, 3799, 2),
    (1621, 3799, 2),
    (1624, 3797, 2),
    (1624, 3795, 2),
    (1624, 3794, 2),
    (1624, 3792, 2),
    (1623, 3791, 2),
    (1622, 3791, 2),
    (1618, 3792, 2),
    (1618, 3793, 2),
    (1618, 3794, 2),
    (1617, 3793, 2),
    (1617, 3792, 2),
    (1618, 3790, 2),
    (1620, 3790, 2),
    (1622, 3790, 2),
    (1624, 3789, 2),
    (1624, 3788, 2),
    (1624, 3786, 2),
    (1624, 3785, 2),
    (1623, 3784, 2),
    (1621, 3784, 2),
    (1611, 3784, 2),
    (1609, 3784, 2),
    (1612, 3789, 2),
    (1612, 3791, 2),
    (1612, 3794, 2),
    (1613, 3793, 2),
    (1613, 3792, 2),
    (1613, 3791, 2),
    (1617, 3791, 2),
    (1617, 3793, 2),
    (1618, 3794, 2),
    (1618, 3792, 2),
    (1619, 3791, 2),
    (1623, 3791, 2),
    (1623, 3790, 2),
    (1622, 3790, 2),
    (1619, 3790, 2),
    (1611, 3816, 2),
    (1610, 3816, 2),
    (1609, 3816, 2),
    (1607, 3817, 2),
    (1607, 3819, 2),
    (1607, 3829, 2),
    (1608, 3831, 2),
    (1610, 3831, 2),
    (1611, 3831, 2),
    (1622, 3831, 2),
    (1623, 3831, 2),
    (1624, 3829, 2),
    (1624, 3828, 2),
    (1624, 3821, 2),
    (1624, 3819, 2),
    (1622, 3816, 2),
    (1620, 3816, 2),
    (1618, 3816, 2),
    (1615, 3821, 2),
    (1617, 3821, 2),
    (1619, 3822, 2),
    (1619, 3824, 2),
    (1618, 3826, 2),
    (1617, 3826, 2),
    (1615, 3827, 2),
    (1616, 3827, 2),
    (1618, 3827, 2),
    (1620, 3826, 2),
    (1620, 3824, 2),
    (1620, 3822, 2),
    (1620, 3821, 2),
    (1619, 3820, 2),
    (1617, 3820, 2),
    (1615, 3820, 2),
    (1641, 3818, 2),
    (1641, 3820, 2),
    (1641, 3821, 2),
    (1641, 3829, 2),
    (1643, 3831, 2),
    (1644, 3831, 2),
    (1654, 3831, 2),
    (1656, 3831, 2),
    (1658, 3830, 2),
    (1658, 3828, 2),
    (1658, 3818, 2),
    (1658, 3817, 2),
    (1656, 3816, 2),
    (1655, 3816, 2),
    (1652, 3816, 2),
    (1648, 3817, 2),
    (1648, 3819, 2),
    (1648, 3821, 2),
    (1649, 3823, 2),
    (1650, 3823, 2),
    (1652, 3823, 2),
    (1654, 3822, 2),
    (1654, 3820, 2),
    (1655, 3820, 2),
    (1655, 3821, 2),
    (1655, 3823, 2),
    (1653, 3824, 2),
    (1652, 3824, 2),
    (1649, 3824, 2),
    (1648, 3824, 2),
    (1647, 3822, 2),
    (1647, 3820, 2),
    (1647, 3818, 2),
    (1645, 3816, 2),
    (1644, 3816, 2),
    (1625, 3802, 2),
    (1625, 3804, 2),
    (1625, 3811, 2),
    (1625, 3812, 2),
    (1627, 3815, 2),
    (1628, 3815, 2),
    (1635, 3815, 2),
    (1637, 3815, 2),
    (1638, 3815, 2),
    (1640, 3813, 2),
    (1640, 3811, 2),
    (1640, 3810, 2),
    (1638, 3800, 2),
    (1632, 3800, 2),
    (1630, 3800, 2),
    (1629, 3800, 2),
    (1627, 3800, 2),
];
