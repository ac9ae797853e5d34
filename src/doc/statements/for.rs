/*!
# `FOR <variable> = x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of lines
while counting over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I = 1 TO 7 STEP 2`.
The step defaults to 1. A step of zero or less counts down.

The expressions are evaluated once, in the order x, y, z.
The first pass always runs even if x is already past y.
The loop resumes at the line after the `FOR`, so it should
be the only statement on its line.

## Example
```text
10 FOR I = 3 TO 1 STEP -1
20 PRINT I
30 NEXT I
RUN
3
2
1
```

*/
